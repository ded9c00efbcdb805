//! Application entry point for the 2D electrostatics viewer.
//!
//! This binary sets up eframe/egui and delegates all interactive logic
//! and rendering to [`Viewer`] from the `viewer` module.

mod viewer;

use viewer::Viewer;

/// Starts the native eframe application.
///
/// Configures [`eframe::NativeOptions`] with default settings and
/// launches the main window. All UI state and rendering are handled by
/// [`Viewer`].
fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Zip Zap Zop",
        options,
        Box::new(|_cc| {
            // Construct the root app state for the viewer.
            Ok(Box::new(Viewer::new()))
        }),
    )
}
