use honggfuzz::fuzz;

use framelink::share::ShareConfig;

fn main() {
    let share = ShareConfig::default();
    loop {
        fuzz!(|data: &str| {
            framelink::token::decode(data).ok();
            share.decode_url(data);
            share.strip_param(data);
        });
    }
}
