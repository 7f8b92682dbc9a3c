use crate::report::model::ScanReport;

pub fn render_text(report: &ScanReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", report.tool.name, report.tool.version));
    out.push_str(&format!(
        "File: {} ({} bytes)\n",
        report.metadata.name, report.metadata.size
    ));
    out.push_str(&format!("Magic bytes: {}\n", report.metadata.magic_bytes));
    out.push_str(&format!("SHA-256: {}\n", report.metadata.sha256));
    out.push_str(&format!(
        "Threat level: {} (score {}/100)\n",
        report.result.threat_level, report.result.score
    ));
    out.push_str(&format!("Summary: {}\n", report.result.summary));
    if !report.result.technical_details.is_empty() {
        out.push_str("Technical details:\n");
        for detail in &report.result.technical_details {
            out.push_str(&format!("  - {detail}\n"));
        }
    }
    out.push_str(&format!("Recommendation: {}\n", report.result.recommendation));
    out
}
