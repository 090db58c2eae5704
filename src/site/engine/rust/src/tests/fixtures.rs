/* src/site/engine/rust/src/tests/fixtures.rs */

use reborn_injector::Document;
use serde_json::{Value, json};

const FOOTER: &str = concat!(
  r#"<footer><div class="footer-contact">"#,
  r#"<p class="footer-email">info@example.se</p><p class="footer-phone">08-000 00 00</p>"#,
  r#"</div><div class="footer-bottom"><p>© 2024 Mall</p></div></footer>"#,
);

pub const HOME_BODY: &str = concat!(
  r#"<nav><div class="logo"><img src="/img/logo.svg"></div></nav>"#,
  r#"<section class="hero"><h1>Mallrubrik</h1><p class="subtitle">Mallunderrubrik</p>"#,
  r#"<a class="btn-primary" href="/">Mall</a></section>"#,
  r#"<section id="services-teaser"><div class="cards-grid"><div class="card">Mall</div></div></section>"#,
  r#"<section id="process-overview"><h2 class="section-title">P</h2><p class="section-subtitle">S</p>"#,
  r#"<div class="process-timeline"><div class="process-step">Mall</div></div></section>"#,
  r#"<section id="final-cta"><h2 class="section-title">F</h2><p class="section-subtitle">FS</p>"#,
  r#"<a class="btn-primary" href="/">Mall</a></section>"#,
);

pub const SERVICES_BODY: &str = concat!(
  r#"<header class="page-header"><h1>Tjänster</h1><p class="subtitle">Mall</p></header>"#,
  r#"<div class="services-grid"><div class="service-card">Mall</div></div>"#,
);

pub const ABOUT_BODY: &str = concat!(
  r#"<header class="page-header"><h1>Om oss</h1><p class="subtitle">Mall</p></header>"#,
  r#"<p class="about-intro">I</p><p class="about-mission">M</p><p class="about-approach">A</p>"#,
  r#"<div class="values-grid"></div>"#,
);

pub const PROCESS_BODY: &str = concat!(
  r#"<header class="page-header"><h1>Process</h1><p class="subtitle">Mall</p></header>"#,
  r#"<p class="process-intro">Mall</p><div class="process-phases"></div>"#,
  r#"<section class="process-cta"><h2 class="section-title">C</h2><p class="section-subtitle">CS</p>"#,
  r#"<a class="btn-primary" href="/">Mall</a></section>"#,
);

pub const CONTACT_BODY: &str = concat!(
  r#"<header class="page-header"><h1>Kontakt</h1><p class="subtitle">Mall</p></header>"#,
  r#"<p class="contact-email">e</p><p class="contact-phone">p</p><p class="contact-address">a</p>"#,
  r#"<div class="form-section"><h2>F</h2><p class="subtitle">FS</p>"#,
  r#"<form id="contact-form"><input name="name" value=""><input name="email" value="">"#,
  r#"<textarea name="message"></textarea><button type="submit">Skicka</button></form>"#,
  r#"<p class="form-cta-text">Mall</p></div>"#,
);

/// A full page around `body`, with the shared footer.
pub fn page(body: &str) -> Document {
  Document::parse(&format!(
    "<!DOCTYPE html><html lang=\"sv\"><head><title>Reborn</title></head><body>{body}{FOOTER}</body></html>"
  ))
}

pub fn home_json() -> Value {
  json!({
    "hero": {
      "title": "Vi skapar digitala upplevelser",
      "subtitle": "Webb, varumärke och strategi",
      "cta_text": "Boka möte",
      "cta_link": "/kontakt.html"
    },
    "services": [
      {"title": "Webbutveckling", "description": "Snabba sajter"},
      {"title": "Varumärke", "description": "Identitet"},
      {"title": "Strategi", "description": "Plan framåt"}
    ],
    "process": {
      "title": "Så jobbar vi",
      "subtitle": "Fyra steg",
      "steps": [
        {"number": 1, "title": "Möte", "description": "Vi lyssnar"},
        {"number": "02", "title": "Förslag", "description": "Vi ritar"}
      ]
    },
    "final_cta": {
      "title": "Redo?",
      "subtitle": "Hör av dig",
      "button_text": "Kontakta oss",
      "button_link": "/kontakt.html"
    }
  })
}

pub fn services_json() -> Value {
  json!({
    "page": {"title": "Våra tjänster", "subtitle": "Allt under ett tak"},
    "services": [
      {"title": "A", "description": "a", "details": "1"},
      {"title": "B", "description": "b", "details": "2"},
      {"title": "C", "description": "c", "details": "3"}
    ]
  })
}

pub fn company_json() -> Value {
  json!({
    "email": "hej@reborn.se",
    "phone": "070-123 45 67",
    "copyright": "© 2025 Reborn Media"
  })
}
