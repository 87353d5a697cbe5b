//! Cache key builders for calculation results.

/// Key for the precision metrics of a template, optionally narrowed to one
/// measurement.
pub fn precision_key(template_id: &str, measurement_key: Option<&str>) -> String {
    format!(
        "precision_{}_{}",
        template_id,
        measurement_key.filter(|m| !m.is_empty()).unwrap_or("all")
    )
}

/// Key for a cross-view consistency result over the given views.
///
/// View order is significant; callers pass views in their canonical order.
pub fn cross_view_key<I, S>(template_id: &str, view_ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = view_ids
        .into_iter()
        .map(|view| view.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("_");
    format!("crossview_{}_{}", template_id, joined)
}

/// Key for a calculation request, built from whichever identifying parts are
/// present. Empty parts are skipped.
pub fn calculation_key(
    template_id: Option<&str>,
    measurement_key: Option<&str>,
    view_id: Option<&str>,
    path: &str,
) -> String {
    let parts: Vec<&str> = [template_id, measurement_key, view_id, Some(path)]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();
    format!("calc_{}", parts.join("_"))
}
