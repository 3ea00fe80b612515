//! Snapshot tests using the insta crate.
//!
//! Inline snapshots capture serialization formats so accidental changes
//! to persisted shapes show up as test failures. To update after
//! intentional changes:
//!
//! ```sh
//! cargo insta test --accept
//! ```

use budgetboard::data::{spending_by_category, SAMPLE_LEDGER};
use budgetboard::settings::Settings;

#[test]
fn snapshot_default_settings_json() {
    insta::assert_json_snapshot!(Settings::default(), @r###"
    {
      "display_name": "Satyam",
      "theme_mode": "light"
    }
    "###);
}

#[test]
fn snapshot_spending_summary() {
    insta::assert_json_snapshot!(spending_by_category(&SAMPLE_LEDGER), @r###"
    [
      [
        "Food",
        51.25
      ],
      [
        "Transport",
        12.25
      ],
      [
        "Entertainment",
        15.0
      ],
      [
        "Health",
        30.0
      ],
      [
        "Bills",
        120.0
      ]
    ]
    "###);
}
