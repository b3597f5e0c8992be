//! Show command implementation.

use wifiqr_core::generator::{default_output_dir, output_file_name};
use wifiqr_core::{load_configuration, wifi_connection_string, ConfigSource};

use crate::ui::print_qr_code;

/// Display the loaded settings and the code itself.
pub fn show(source: &impl ConfigSource) -> anyhow::Result<()> {
    let config = load_configuration(source)?;

    println!("\n\x1b[1mWi-Fi Network\x1b[0m");
    println!("═══════════════════════════════════════");
    println!("\x1b[1mSSID:\x1b[0m     {}", config.ssid);
    println!("\x1b[1mPassword:\x1b[0m {}", mask(&config.password));
    println!("\x1b[1mSecurity:\x1b[0m {}", config.security);
    println!("\x1b[1mHidden:\x1b[0m   {}", config.hidden);
    println!(
        "\x1b[1mImage:\x1b[0m    {}",
        default_output_dir().join(output_file_name(&config.ssid)).display()
    );

    let reserved = config.reserved_fields();
    if !reserved.is_empty() {
        println!(
            "\n\x1b[1;33m!\x1b[0m {} contains unescaped reserved characters",
            reserved.join(" and ")
        );
    }

    println!();
    print_qr_code(&wifi_connection_string(&config))?;
    println!();

    Ok(())
}

fn mask(password: &str) -> String {
    if password.is_empty() {
        "(empty)".to_string()
    } else {
        "•".repeat(password.chars().count())
    }
}
