use crate::constants::STATS_PANEL_ID;
use crate::core::StatsReport;
use web_sys as web;

/// Find or create the stats panel pinned to the top-right corner.
pub fn ensure_stats_panel(document: &web::Document) -> Option<web::Element> {
    if let Some(el) = document.get_element_by_id(STATS_PANEL_ID) {
        return Some(el);
    }
    let el = document.create_element("div").ok()?;
    el.set_id(STATS_PANEL_ID);
    _ = el.set_attribute(
        "style",
        "position:absolute;top:0px;right:0px;padding:4px 8px;\
         font:11px monospace;color:#0ff;background:rgba(0,0,32,0.8);\
         pointer-events:none;z-index:10",
    );
    document.body()?.append_child(&el).ok()?;
    Some(el)
}

/// Refresh the panel text from the latest report.
pub fn update_stats(el: &web::Element, report: &StatsReport, particles: usize) {
    el.set_text_content(Some(&format!(
        "{:.0} FPS ({:.0}-{:.0}) {:.1} ms · {} particles",
        report.fps, report.min_fps, report.max_fps, report.frame_ms, particles
    )));
}
