//! QR code display in the terminal.

use wifiqr_core::encoder::terminal_preview;

/// Print a QR code to the terminal.
///
/// Each character covers 2 vertical modules, indented so the quiet zone
/// stands off the left edge.
pub fn print_qr_code(data: &str) -> wifiqr_core::Result<()> {
    let rendered = terminal_preview(data)?;

    let quiet = "  ";
    for line in rendered.lines() {
        println!("{}{}", quiet, line);
    }

    Ok(())
}
