use qrcode::{EcLevel, QrCode};

use std::io::Write;

use framelink::share::ShareConfig;
use framelink::{Field, FrameConfiguration};

// Usage: cargo run --example qr -- artwork_height=16 artwork_width=20 include_mat=false
fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = args.iter().filter_map(|arg| arg.split_once('='));
    let config = FrameConfiguration::from_settings(settings).unwrap();

    let url = ShareConfig::default().share_url(&config).unwrap();
    let code = QrCode::with_error_correction_level(&url, EcLevel::M).unwrap();
    let string = code
        .render::<char>()
        .quiet_zone(false)
        .module_dimensions(2, 1)
        .build();

    let mut stdout = std::io::stdout();
    stdout.write_all(format!("{string}\n").as_bytes()).unwrap();
    stdout.write_all(format!("{url}\n").as_bytes()).unwrap();
    for field in Field::ALL {
        writeln!(stdout, "{field:>20} {}", config.get(field)).unwrap();
    }
    stdout.flush().unwrap();
}
