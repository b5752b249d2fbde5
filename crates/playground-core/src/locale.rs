//! Static English / Indonesian UI labels.
//!
//! The language selector offers exactly two entries, so lookups cannot miss.

use std::str::FromStr;

use serde::Serialize;

use crate::Notice;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Locale {
    #[default]
    English,
    Indonesia,
}

/// Every label the UI shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Labels {
    pub language: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub matrix_tab: &'static str,
    pub image_tab: &'static str,
    pub data_tab: &'static str,
    pub team_tab: &'static str,
    pub input_points: &'static str,
    pub rotation_angle: &'static str,
    pub original: &'static str,
    pub rotated: &'static str,
    pub upload_image: &'static str,
    pub blur: &'static str,
    pub sharpen: &'static str,
    pub bg_remove: &'static str,
    pub apply: &'static str,
    pub result: &'static str,
    pub download: &'static str,
    pub upload_csv: &'static str,
    pub menu_home: &'static str,
    pub menu_upload: &'static str,
    pub menu_summary: &'static str,
    pub menu_visualize: &'static str,
    pub menu_missing: &'static str,
    pub shape: &'static str,
    pub dtypes: &'static str,
    pub describe: &'static str,
    pub select_column: &'static str,
    pub missing_values: &'static str,
    pub no_data: &'static str,
    pub nothing_to_visualize: &'static str,
    pub unknown_column: &'static str,
    pub not_numeric: &'static str,
}

static ENGLISH: Labels = Labels {
    language: "Language / Bahasa",
    title: "Matrix & Image Processing Playground",
    desc: "Matrix transformations for 2D points and basic image processing features.",
    matrix_tab: "Matrix Transformations",
    image_tab: "Image Processing",
    data_tab: "Data Explorer",
    team_tab: "Developer Team",
    input_points: "Input points (x,y)",
    rotation_angle: "Rotation angle (deg)",
    original: "Original",
    rotated: "Rotated",
    upload_image: "Upload an image",
    blur: "Blur",
    sharpen: "Sharpen",
    bg_remove: "Background Removal (simple)",
    apply: "Apply",
    result: "Result",
    download: "Download Result",
    upload_csv: "Upload a CSV file",
    menu_home: "Home",
    menu_upload: "Upload Data",
    menu_summary: "Data Summary",
    menu_visualize: "Visualization",
    menu_missing: "Missing Values",
    shape: "Shape (rows, columns)",
    dtypes: "Data Types",
    describe: "Descriptive Statistics",
    select_column: "Select a numeric column",
    missing_values: "Missing values per column",
    no_data: "Please upload a CSV file first.",
    nothing_to_visualize: "No numeric data to visualize.",
    unknown_column: "Column not found.",
    not_numeric: "The selected column is not numeric.",
};

static INDONESIA: Labels = Labels {
    language: "Language / Bahasa",
    title: "Aplikasi Transformasi Matriks & Pengolahan Citra",
    desc: "Transformasi matriks 2D dan fitur dasar pengolahan citra.",
    matrix_tab: "Transformasi Matriks",
    image_tab: "Pengolahan Citra",
    data_tab: "Eksplorasi Data",
    team_tab: "Tim Pengembang",
    input_points: "Titik masukan (x,y)",
    rotation_angle: "Sudut rotasi (derajat)",
    original: "Asli",
    rotated: "Hasil Rotasi",
    upload_image: "Unggah gambar",
    blur: "Blur",
    sharpen: "Pertajam",
    bg_remove: "Hapus Latar Belakang (sederhana)",
    apply: "Terapkan",
    result: "Hasil",
    download: "Unduh Hasil",
    upload_csv: "Unggah file CSV",
    menu_home: "Beranda",
    menu_upload: "Unggah Data",
    menu_summary: "Ringkasan Data",
    menu_visualize: "Visualisasi",
    menu_missing: "Nilai Kosong",
    shape: "Ukuran (baris, kolom)",
    dtypes: "Tipe Data",
    describe: "Statistik Deskriptif",
    select_column: "Pilih kolom numerik",
    missing_values: "Jumlah nilai kosong per kolom",
    no_data: "Silakan unggah file CSV terlebih dahulu.",
    nothing_to_visualize: "Tidak ada data numerik untuk divisualisasikan.",
    unknown_column: "Kolom tidak ditemukan.",
    not_numeric: "Kolom yang dipilih bukan numerik.",
};

/// Error for a locale key outside the two supported ones.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown locale: {0}")]
pub struct UnknownLocale(pub String);

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Indonesia];

    /// Key shown in the language selector.
    pub fn key(self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Indonesia => "Indonesia",
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::English => &ENGLISH,
            Locale::Indonesia => &INDONESIA,
        }
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|l| l.key() == s)
            .ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

impl Labels {
    /// The full label mapping as `(key, text)` pairs.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("language", self.language),
            ("title", self.title),
            ("desc", self.desc),
            ("matrix_tab", self.matrix_tab),
            ("image_tab", self.image_tab),
            ("data_tab", self.data_tab),
            ("team_tab", self.team_tab),
            ("input_points", self.input_points),
            ("rotation_angle", self.rotation_angle),
            ("original", self.original),
            ("rotated", self.rotated),
            ("upload_image", self.upload_image),
            ("blur", self.blur),
            ("sharpen", self.sharpen),
            ("bg_remove", self.bg_remove),
            ("apply", self.apply),
            ("result", self.result),
            ("download", self.download),
            ("upload_csv", self.upload_csv),
            ("menu_home", self.menu_home),
            ("menu_upload", self.menu_upload),
            ("menu_summary", self.menu_summary),
            ("menu_visualize", self.menu_visualize),
            ("menu_missing", self.menu_missing),
            ("shape", self.shape),
            ("dtypes", self.dtypes),
            ("describe", self.describe),
            ("select_column", self.select_column),
            ("missing_values", self.missing_values),
            ("no_data", self.no_data),
            ("nothing_to_visualize", self.nothing_to_visualize),
            ("unknown_column", self.unknown_column),
            ("not_numeric", self.not_numeric),
        ]
    }

    /// Look up a label by key.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries()
            .into_iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Localized text for a notice.
    pub fn notice(&self, notice: &Notice) -> &'static str {
        match notice {
            Notice::NoData => self.no_data,
            Notice::NothingToVisualize => self.nothing_to_visualize,
            Notice::UnknownColumn(_) => self.unknown_column,
            Notice::NotNumeric(_) => self.not_numeric,
        }
    }
}
