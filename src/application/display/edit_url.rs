use super::templates::DisplayTemplates;
use crate::{
    application::{
        dto::KbArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::WorkflowStatus,
};

/// Prefix under which a display instance's own request parameters travel.
pub fn portlet_namespace(portlet_id: &str) -> String {
    format!("_{portlet_id}_")
}

/// Replace (or append) one query parameter of `url`, keeping any fragment.
pub fn set_parameter(url: &str, name: &str, value: &str) -> ApplicationResult<String> {
    let (without_fragment, fragment) = match url.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (url, None),
    };
    let (base, query) = without_fragment
        .split_once('?')
        .unwrap_or((without_fragment, ""));

    let mut pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)
        .map_err(|err| ApplicationError::validation(format!("invalid url query: {err}")))?;
    pairs.retain(|(key, _)| key != name);
    pairs.push((name.to_string(), value.to_string()));

    let query = serde_urlencoded::to_string(&pairs)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    let mut result = format!("{base}?{query}");
    if let Some(fragment) = fragment {
        result.push('#');
        result.push_str(fragment);
    }
    Ok(result)
}

/// URL of this display instance's edit screen for `article`.
///
/// Always requests every workflow status so editors see drafts as well.
pub fn build_edit_url(
    layout_url: &str,
    portlet_id: &str,
    redirect: &str,
    templates: &DisplayTemplates,
    article: &KbArticleDto,
) -> ApplicationResult<String> {
    let namespace = portlet_namespace(portlet_id);

    let url = set_parameter(layout_url, "p_p_id", portlet_id)?;
    let url = set_parameter(
        &url,
        &format!("{namespace}mvcPath"),
        &templates.edit_article_template(),
    )?;
    let url = set_parameter(&url, &format!("{namespace}redirect"), redirect)?;
    let url = set_parameter(
        &url,
        &format!("{namespace}resourcePrimKey"),
        &article.resource_prim_key.to_string(),
    )?;
    set_parameter(
        &url,
        &format!("{namespace}status"),
        &WorkflowStatus::Any.code().to_string(),
    )
}
