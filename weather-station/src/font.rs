//! System font discovery and registration.
//!
//! The UI label includes Cyrillic, which egui's built-in font does not cover,
//! so we probe a few well-known system fonts that do. If none is found the
//! built-in font stays in place and the Cyrillic line may render as boxes.

use std::path::{Path, PathBuf};

use eframe::egui;

/// Probed in order; every candidate covers Basic Latin and Cyrillic.
const FONT_CANDIDATES: &[&str] = &[
    r"C:\Windows\Fonts\arial.ttf",
    r"C:\Windows\Fonts\segoeui.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/google-roboto/Roboto-Regular.ttf",
];

/// First existing candidate, or `None` when the system has none of them.
pub fn find_system_font() -> Option<PathBuf> {
    first_existing(FONT_CANDIDATES.iter().map(Path::new))
}

fn first_existing<'a>(candidates: impl IntoIterator<Item = &'a Path>) -> Option<PathBuf> {
    candidates.into_iter().find(|path| path.exists()).map(Path::to_path_buf)
}

/// Register the first available system font as the primary proportional font.
///
/// Absence of a usable font is not an error; egui keeps its built-in font.
pub fn install_system_font(ctx: &egui::Context) {
    let Some(path) = find_system_font() else {
        log::info!("No system font found, using the built-in font");
        return;
    };

    match std::fs::read(&path) {
        Ok(bytes) => {
            let mut fonts = egui::FontDefinitions::default();
            fonts.font_data.insert("system".to_owned(), egui::FontData::from_owned(bytes).into());
            fonts
                .families
                .entry(egui::FontFamily::Proportional)
                .or_default()
                .insert(0, "system".to_owned());
            fonts.families.entry(egui::FontFamily::Monospace).or_default().push("system".to_owned());
            ctx.set_fonts(fonts);
            log::info!("Loaded system font from {}", path.display());
        }
        Err(err) => {
            log::warn!("Failed to read font {}: {err}, using the built-in font", path.display());
        }
    }
}
