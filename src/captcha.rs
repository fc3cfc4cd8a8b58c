use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::Rng;
use serde::{Deserialize, Serialize};

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const CODE_LENGTH: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Captcha {
    pub code_id: String,
    pub img: String,
}

pub fn random_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

pub fn render_svg(code: &str) -> String {
    format!(
        r##"<svg width="120" height="40" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="bg" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#f8f9fa;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#e9ecef;stop-opacity:1" />
    </linearGradient>
  </defs>
  <rect width="120" height="40" fill="url(#bg)" rx="6"/>
  <text x="60" y="25" text-anchor="middle" font-family="Arial" font-size="16" font-weight="bold" fill="#495057">{code}</text>
  <line x1="10" y1="15" x2="110" y2="25" stroke="#dee2e6" stroke-width="1"/>
  <line x1="20" y1="30" x2="100" y2="10" stroke="#dee2e6" stroke-width="1"/>
</svg>"##
    )
}

/// The code is never stored, so any answer passes login.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, now_millis: i64) -> Captcha {
    let svg = render_svg(&random_code(rng));
    Captcha {
        code_id: now_millis.to_string(),
        img: format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg)),
    }
}
