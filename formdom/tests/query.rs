use formdom::{find_by_placeholder, find_element, find_text, query_all_text, Element};

fn page() -> Element {
    Element::col()
        .id("root")
        .child(Element::text("Contact Form").id("header"))
        .child(Element::text("First Name").id("firstname-label"))
        .child(Element::text_input("").id("firstname").placeholder("Edd"))
        .child(Element::text("Email").id("email-label"))
        .child(
            Element::text_input("")
                .id("email")
                .placeholder("bluebill1049@hotmail.com"),
        )
}

#[test]
fn test_find_text_is_case_insensitive_substring_match() {
    let root = page();

    assert!(find_text(&root, "contact form").is_some());
    assert!(find_text(&root, "Contact").is_some());
    assert!(find_text(&root, "no such text").is_none());
}

#[test]
fn test_find_text_returns_the_node() {
    let root = page();

    let header = find_text(&root, "contact form").unwrap();
    assert_eq!(header.id, "header");
    assert_eq!(header.as_text(), Some("Contact Form"));
}

#[test]
fn test_query_all_text_counts_matches() {
    let root = page();

    assert_eq!(query_all_text(&root, "name").len(), 1);
    assert_eq!(query_all_text(&root, "nothing here").len(), 0);
}

#[test]
fn test_find_by_placeholder() {
    let root = page();

    let input = find_by_placeholder(&root, "edd").unwrap();
    assert_eq!(input.id, "firstname");

    let input = find_by_placeholder(&root, "bluebill1049@hotmail.com").unwrap();
    assert_eq!(input.id, "email");

    assert!(find_by_placeholder(&root, "missing").is_none());
}

#[test]
fn test_placeholder_lookup_ignores_text_nodes() {
    let root = Element::col()
        .id("root")
        .child(Element::text("Edd").id("not-an-input"));

    assert!(find_by_placeholder(&root, "Edd").is_none());
}

#[test]
fn test_find_element_by_id() {
    let root = page();

    assert!(find_element(&root, "email").is_some());
    assert!(find_element(&root, "email-display").is_none());
}
