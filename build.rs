use std::fs;
use std::path::Path;

// (define in secrets_config.h, env var set for the firmware)
const SECRETS: [(&str, &str); 5] = [
    ("WIFI_SSID", "WIFI_SSID"),
    ("WIFI_PASSWORD", "WIFI_PASSWORD"),
    ("AIO_USERNAME", "AIO_USERNAME"),
    ("AIO_KEY", "AIO_KEY"),
    ("TIMEZONE", "TRACKER_TIMEZONE"),
];

fn main() -> anyhow::Result<()> {
    // Necessary for ESP-IDF
    embuild::espidf::sysenv::output();

    // Read credentials if the file exists
    let secrets_path = "secrets_config.h";
    println!("cargo:rerun-if-changed={}", secrets_path);

    if Path::new(secrets_path).exists() {
        let contents = fs::read_to_string(secrets_path)?;

        for (define, env) in SECRETS {
            let needle = format!("#define {} ", define);
            let value = contents
                .lines()
                .find(|l| l.trim_start().starts_with(&needle))
                .and_then(|l| l.split('"').nth(1))
                .unwrap_or("");
            println!("cargo:rustc-env={}={}", env, value);
        }
    } else {
        // Use empty defaults if no secrets file
        for (_, env) in SECRETS {
            println!("cargo:rustc-env={}=", env);
        }
        println!("cargo:warning=secrets_config.h not found! Copy secrets_config.h.example to secrets_config.h and add your credentials.");
    }

    Ok(())
}
