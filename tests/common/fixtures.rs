//! Static record corpora used across harnesses.
//!
//! Each corpus is a JSON document as it would appear on disk, so harnesses
//! can exercise both the dataset loader and the pipeline stages from the
//! same text.

use std::path::{Path, PathBuf};

/// A small sample of clean scraped records that pass every rule.
pub const CORPUS_CLEAN: &str = r#"[
  {
    "id": "sku-100",
    "title": "Espresso machine",
    "content": "Fifteen bar pump with a steam wand and a removable water tank.",
    "price": 199.0,
    "currency": "usd",
    "url": "https://shop.example/espresso",
    "scraped_at": "2024-03-15"
  },
  {
    "id": "sku-101",
    "title": "Burr grinder",
    "content": "Conical steel burrs, forty grind settings and a quiet motor.",
    "price": "$89.50",
    "currency": "USD",
    "url": "http://shop.example/grinder",
    "scraped_at": "16/03/2024"
  }
]"#;

/// Noisy records: markup, entities, odd prices, legacy keys, wrong types.
pub const CORPUS_NOISY: &str = r#"[
  {
    "title": "  Hi  ",
    "description": "<p>Short</p>",
    "price": "USD 5",
    "url": "ftp://x",
    "scraped_at": "2024-13-40"
  },
  {
    "id": 7,
    "title": "<b>Caf&eacute;</b>&nbsp;Beans",
    "content": "<div>Single origin beans,\n\n roasted   weekly &amp; shipped fresh.</div>",
    "price": "EUR 12.00",
    "currency": " eur ",
    "url": "  https://shop.example/beans  ",
    "scraped_at": "03/04/2024"
  },
  {
    "id": "   ",
    "title": null,
    "content": "",
    "price": "no price",
    "currency": null,
    "scraped_at": "yesterday"
  },
  {
    "id": "sku-9",
    "title": ["not", "a", "string"],
    "content": {"html": "<p>nested</p>"},
    "price": true,
    "url": "",
    "scraped_at": 20240315
  }
]"#;

/// The normalized form of [`CORPUS_NOISY`], as the `clean` stage writes it.
pub const CORPUS_NOISY_CLEANED: &str = r#"[
  {
    "id": null,
    "title": "Hi",
    "content": "Short",
    "price": 5.0,
    "currency": null,
    "url": "ftp://x",
    "scraped_at": "2024-13-40"
  },
  {
    "id": "7",
    "title": "Café Beans",
    "content": "Single origin beans, roasted weekly & shipped fresh.",
    "price": 12.0,
    "currency": "EUR",
    "url": "https://shop.example/beans",
    "scraped_at": "2024-04-03"
  },
  {
    "id": null,
    "title": "",
    "content": "",
    "price": null,
    "currency": null,
    "url": null,
    "scraped_at": null
  },
  {
    "id": "sku-9",
    "title": "[\"not\",\"a\",\"string\"]",
    "content": "{\"html\":\" nested \"}",
    "price": null,
    "currency": null,
    "url": null,
    "scraped_at": null
  }
]"#;

/// Top-level documents that are valid JSON but not an array of records.
pub const NOT_AN_ARRAY: &[&str] = &[
    r#"{"title": "a single object"}"#,
    r#""just a string""#,
    "42",
    "null",
];

/// Write `contents` to `name` inside `dir` and return the full path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("fixture write must succeed");
    path
}
