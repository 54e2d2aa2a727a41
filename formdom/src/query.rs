//! Lookup helpers over the element tree, used by behavioral tests to locate
//! visible text, inputs, and labeled nodes the way a user would.

use crate::element::{Content, Element};

/// Find the first text node whose content contains `pat`
/// (case-insensitive).
pub fn find_text<'a>(root: &'a Element, pat: &str) -> Option<&'a Element> {
    let pat = pat.to_lowercase();
    find_first(root, &|el| {
        el.as_text()
            .is_some_and(|text| text.to_lowercase().contains(&pat))
    })
}

/// All text nodes whose content contains `pat` (case-insensitive).
pub fn query_all_text<'a>(root: &'a Element, pat: &str) -> Vec<&'a Element> {
    let pat = pat.to_lowercase();
    let mut found = Vec::new();
    collect(root, &mut found, &|el| {
        el.as_text()
            .is_some_and(|text| text.to_lowercase().contains(&pat))
    });
    found
}

/// Find the first text input whose placeholder contains `pat`
/// (case-insensitive).
pub fn find_by_placeholder<'a>(root: &'a Element, pat: &str) -> Option<&'a Element> {
    let pat = pat.to_lowercase();
    find_first(root, &|el| match &el.content {
        Content::TextInput {
            placeholder: Some(placeholder),
            ..
        } => placeholder.to_lowercase().contains(&pat),
        _ => false,
    })
}

fn find_first<'a>(
    element: &'a Element,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<&'a Element> {
    if accept(element) {
        return Some(element);
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            if let Some(found) = find_first(child, accept) {
                return Some(found);
            }
        }
    }

    None
}

fn collect<'a>(
    element: &'a Element,
    found: &mut Vec<&'a Element>,
    accept: &dyn Fn(&Element) -> bool,
) {
    if accept(element) {
        found.push(element);
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            collect(child, found, accept);
        }
    }
}
