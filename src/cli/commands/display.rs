//! Shared rendering of reports.
//!
//! Used by `scan`, `check` and `watch` so the environment summary and the
//! conflict list look the same everywhere.

use crate::reconcile::ConflictReport;
use crate::report::Report;
use crate::shell::ProbeOutput;
use crate::ui::UserInterface;

/// First line of a probe's output, for one-line summaries.
///
/// `java -version` prints three lines; the first names the version.
pub fn first_line(output: &ProbeOutput) -> String {
    let text = output.to_string();
    text.lines().next().unwrap_or_default().trim().to_string()
}

/// Show the OS and toolchain summary.
pub fn show_environment(ui: &mut dyn UserInterface, report: &Report) {
    if !ui.output_mode().shows_summary() {
        return;
    }

    ui.show_header("Environment");
    let os = &report.os;
    ui.show_field(
        "OS",
        &format!("{} {} ({})", os.system, os.release, os.machine),
    );
    ui.show_field("Python", &first_line(&report.python.version));
    ui.detail(&format!("  executable: {}", report.python.executable));
    ui.show_field(
        "Packages",
        &format!("{} installed", report.python.packages.len()),
    );
    for (name, version) in &report.python.packages {
        ui.detail(&format!("    {}=={}", name, version));
    }
    ui.show_field("Java", &first_line(&report.java.version));
    ui.show_field("javac", &first_line(&report.java.javac_version));
    ui.show_field("Node.js", &first_line(&report.node.version));
    ui.show_field("npm", &first_line(&report.node.npm_version));
    ui.detail(&report.node.global_packages.to_string());
}

/// Show findings grouped by ecosystem.
pub fn show_conflicts(ui: &mut dyn UserInterface, conflicts: &ConflictReport) {
    ui.show_header("Conflicts");

    if conflicts.is_empty() {
        ui.success("No conflicts detected");
        return;
    }

    for (ecosystem, findings) in conflicts.iter() {
        if findings.is_empty() {
            continue;
        }
        ui.message(&format!("{}:", ecosystem.label()));
        for finding in findings {
            ui.warning(finding);
        }
    }
}
