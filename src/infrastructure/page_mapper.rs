// Mapper to convert raw query results into flat dashboard records
use crate::domain::record::{Service, User};
use crate::infrastructure::notion_page::{Page, PropertyValue};
use serde_json::Value;

/// Convert a batch of raw query results into user rows. A page that cannot
/// be read becomes a placeholder row; the batch never shrinks and keeps the
/// input order.
pub fn map_users(results: &[Value]) -> Vec<User> {
    results
        .iter()
        .map(|raw| match parse_page(raw) {
            Some(page) => map_user(&page),
            None => User::load_error(raw_page_id(raw)),
        })
        .collect()
}

/// Convert a batch of raw query results into service rows.
pub fn map_services(results: &[Value]) -> Vec<Service> {
    results
        .iter()
        .map(|raw| match parse_page(raw) {
            Some(page) => map_service(&page),
            None => Service::load_error(raw_page_id(raw)),
        })
        .collect()
}

/// Extract the flat user shape from one page. Total: absent properties and
/// mismatched variants become empty strings.
pub fn map_user(page: &Page) -> User {
    User {
        id: page.id.clone(),
        name: string_prop(page, "Name", PropertyValue::title_text),
        email: string_prop(page, "Email", PropertyValue::email),
        number: string_prop(page, "Number", PropertyValue::phone_number),
        role: string_prop(page, "Role", PropertyValue::select_name),
    }
}

/// Extract the flat service shape from one page.
pub fn map_service(page: &Page) -> Service {
    Service {
        id: page.id.clone(),
        name: string_prop(page, "Name", PropertyValue::title_text),
        description: string_prop(page, "Description", PropertyValue::rich_text),
        price: price_prop(page),
        status: string_prop(page, "Status", PropertyValue::select_name),
        category: category_prop(page),
    }
}

fn parse_page(raw: &Value) -> Option<Page> {
    match serde_json::from_value::<Page>(raw.clone()) {
        Ok(page) => Some(page),
        Err(e) => {
            tracing::warn!(
                "could not read page {:?}, substituting placeholder row: {}",
                raw_page_id(raw),
                e
            );
            None
        }
    }
}

fn raw_page_id(raw: &Value) -> String {
    raw.get("id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn string_prop(page: &Page, key: &str, extract: fn(&PropertyValue) -> Option<&str>) -> String {
    page.properties
        .get(key)
        .and_then(extract)
        .unwrap_or("")
        .to_string()
}

/// Price is a number in some databases ("$"-prefixed here) and free-form
/// rich text in others.
fn price_prop(page: &Page) -> String {
    match page.properties.get("Price") {
        Some(prop) => match prop.number() {
            Some(n) => format!("${}", n),
            None => prop.rich_text().unwrap_or("").to_string(),
        },
        None => String::new(),
    }
}

/// Category is a select in some databases and a multi-select in others;
/// only the first multi-select entry is kept.
fn category_prop(page: &Page) -> String {
    page.properties
        .get("Category")
        .and_then(|prop| prop.select_name().or_else(|| prop.multi_select_first()))
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page_json(id: &str, properties: Value) -> Value {
        json!({
            "id": id,
            "created_time": "2024-01-10T08:30:00.000Z",
            "last_edited_time": "2024-02-02T12:00:00.000Z",
            "properties": properties
        })
    }

    fn parse(raw: Value) -> Page {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_map_user_extracts_all_fields() {
        let page = parse(page_json(
            "u-1",
            json!({
                "Name": { "type": "title", "title": [{ "plain_text": "Ana" }] },
                "Email": { "type": "email", "email": "ana@example.com" },
                "Number": { "type": "phone_number", "phone_number": "+34 600 000 000" },
                "Role": { "type": "select", "select": { "name": "Admin" } }
            }),
        ));

        let user = map_user(&page);
        assert_eq!(user.id, "u-1");
        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "ana@example.com");
        assert_eq!(user.number, "+34 600 000 000");
        assert_eq!(user.role, "Admin");
    }

    #[test]
    fn test_missing_fields_become_empty_strings() {
        let page = parse(page_json("u-2", json!({})));

        let user = map_user(&page);
        assert_eq!(user.id, "u-2");
        assert_eq!(user.name, "");
        assert_eq!(user.email, "");
        assert_eq!(user.number, "");
        assert_eq!(user.role, "");
    }

    #[test]
    fn test_mismatched_variants_become_empty_strings() {
        // Every expected field carries the wrong variant
        let page = parse(page_json(
            "u-3",
            json!({
                "Name": { "type": "email", "email": "not-a-title@example.com" },
                "Email": { "type": "number", "number": 4 },
                "Number": { "type": "checkbox", "checkbox": true },
                "Role": { "type": "multi_select", "multi_select": [{ "name": "Admin" }] }
            }),
        ));

        let user = map_user(&page);
        assert_eq!(user.name, "");
        assert_eq!(user.email, "");
        assert_eq!(user.number, "");
        assert_eq!(user.role, "");
    }

    #[test]
    fn test_null_payloads_become_empty_strings() {
        let page = parse(page_json(
            "u-4",
            json!({
                "Name": { "type": "title", "title": [] },
                "Email": { "type": "email", "email": null },
                "Role": { "type": "select", "select": null }
            }),
        ));

        let user = map_user(&page);
        assert_eq!(user.name, "");
        assert_eq!(user.email, "");
        assert_eq!(user.role, "");
    }

    #[test]
    fn test_numeric_price_is_dollar_prefixed() {
        let page = parse(page_json(
            "s-1",
            json!({ "Price": { "type": "number", "number": 150 } }),
        ));

        assert_eq!(map_service(&page).price, "$150");
    }

    #[test]
    fn test_fractional_and_zero_prices() {
        let page = parse(page_json(
            "s-2",
            json!({ "Price": { "type": "number", "number": 150.5 } }),
        ));
        assert_eq!(map_service(&page).price, "$150.5");

        let page = parse(page_json(
            "s-3",
            json!({ "Price": { "type": "number", "number": 0 } }),
        ));
        assert_eq!(map_service(&page).price, "$0");
    }

    #[test]
    fn test_rich_text_price_passes_through() {
        let page = parse(page_json(
            "s-4",
            json!({
                "Price": { "type": "rich_text", "rich_text": [{ "plain_text": "from $99/mo" }] }
            }),
        ));

        assert_eq!(map_service(&page).price, "from $99/mo");
    }

    #[test]
    fn test_null_price_number_is_empty() {
        let page = parse(page_json(
            "s-5",
            json!({ "Price": { "type": "number", "number": null } }),
        ));

        assert_eq!(map_service(&page).price, "");
    }

    #[test]
    fn test_category_prefers_select_then_first_multi_select() {
        let page = parse(page_json(
            "s-6",
            json!({
                "Category": { "type": "select", "select": { "name": "Consulting" } }
            }),
        ));
        assert_eq!(map_service(&page).category, "Consulting");

        let page = parse(page_json(
            "s-7",
            json!({
                "Category": {
                    "type": "multi_select",
                    "multi_select": [{ "name": "Design" }, { "name": "Dev" }]
                }
            }),
        ));
        assert_eq!(map_service(&page).category, "Design");
    }

    #[test]
    fn test_map_service_extracts_description_and_status() {
        let page = parse(page_json(
            "s-8",
            json!({
                "Name": { "type": "title", "title": [{ "plain_text": "Audit" }] },
                "Description": {
                    "type": "rich_text",
                    "rich_text": [{ "plain_text": "Yearly audit" }, { "plain_text": "ignored" }]
                },
                "Status": { "type": "select", "select": { "name": "Active" } }
            }),
        ));

        let service = map_service(&page);
        assert_eq!(service.name, "Audit");
        assert_eq!(service.description, "Yearly audit");
        assert_eq!(service.status, "Active");
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let page = parse(page_json(
            "u-5",
            json!({
                "Name": { "type": "title", "title": [{ "plain_text": "Ana" }] },
                "Role": { "type": "select", "select": { "name": "Admin" } }
            }),
        ));

        assert_eq!(map_user(&page), map_user(&page));
    }

    #[test]
    fn test_batch_preserves_order() {
        let results = vec![
            page_json("a", json!({ "Name": { "type": "title", "title": [{ "plain_text": "A" }] } })),
            page_json("b", json!({ "Name": { "type": "title", "title": [{ "plain_text": "B" }] } })),
            page_json("c", json!({ "Name": { "type": "title", "title": [{ "plain_text": "C" }] } })),
        ];

        let users = map_users(&results);
        let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(users[1].name, "B");
    }

    #[test]
    fn test_unreadable_page_becomes_placeholder_row() {
        let results = vec![
            page_json("a", json!({ "Name": { "type": "title", "title": [{ "plain_text": "A" }] } })),
            // Malformed: the title payload is not an array
            page_json("b", json!({ "Name": { "type": "title", "title": "oops" } })),
            page_json("c", json!({ "Name": { "type": "title", "title": [{ "plain_text": "C" }] } })),
        ];

        let users = map_users(&results);
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].name, "A");
        assert_eq!(users[1].id, "b");
        assert_eq!(users[1].name, "error loading");
        assert_eq!(users[2].name, "C");
    }

    #[test]
    fn test_unknown_property_tags_do_not_break_mapping() {
        let page = parse(page_json(
            "u-6",
            json!({
                "Name": { "type": "title", "title": [{ "plain_text": "Ana" }] },
                "Computed": { "type": "formula", "formula": { "string": "x" } },
                "Owner": { "type": "people", "people": [{ "id": "p-1" }] }
            }),
        ));

        assert_eq!(map_user(&page).name, "Ana");
    }
}
