// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Output formatting
//!
//! `--json` prints the outcome document returned by the client; otherwise
//! results are rendered as borderless tables and one-line summaries.

use comfy_table::{Table, presets::NOTHING};
use sddc_api::LicenseKey;
use sddc_client::{TaskReport, ValidationReport};
use serde::Serialize;

/// Print a value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(headers);
    table
}

/// Check table plus a summary line
pub fn print_validation(report: &ValidationReport) {
    if !report.checks.is_empty() {
        let mut checks = table(&["CHECK", "RESULT", "SEVERITY"]);
        for check in &report.checks {
            checks.add_row(vec![
                check.name(),
                check.result_status.as_deref().unwrap_or("-"),
                check.severity.as_deref().unwrap_or("-"),
            ]);
        }
        println!("{checks}");
    }

    let verdict = if report.passed() {
        "succeeded"
    } else if report.timed_out {
        "timed out"
    } else {
        "failed"
    };
    println!(
        "Validation {} {verdict} ({})",
        report.id.as_deref().unwrap_or("(no id)"),
        report.execution_status
    );
}

pub fn print_task(report: &TaskReport) {
    let suffix = if report.timed_out {
        " (timed out while pending)"
    } else {
        ""
    };
    println!("Task {}: {}{suffix}", report.task_id, report.status);
}

pub fn print_license_keys<'a>(keys: impl IntoIterator<Item = &'a LicenseKey>) {
    let mut listing = table(&["ID", "KEY", "PRODUCT", "STATUS", "EXPIRES"]);
    for license in keys {
        let validity = license.license_key_validity.as_ref();
        listing.add_row(vec![
            license.id.as_deref().unwrap_or("-"),
            license.key.as_deref().unwrap_or("-"),
            license.product_type.as_deref().unwrap_or("-"),
            validity
                .and_then(|v| v.license_key_status.as_deref())
                .unwrap_or("-"),
            validity
                .and_then(|v| v.expiry_date.as_deref())
                .unwrap_or("-"),
        ]);
    }
    println!("{listing}");
}
