//! Dynamic JSON documents as sources.

use lazyseq::{Error, ErrorKind, Sequence};
use serde::Deserialize;
use serde_json::json;

#[test]
fn test_from_rejects_non_iterable_values() {
    let err = Sequence::from(json!({ "name": "test" })).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Construction);
    assert_eq!(err.to_string(), "from: object is not iterable");

    let err = Sequence::from(json!(42)).err().unwrap();
    assert_eq!(
        err,
        Error::Construction {
            found: "number",
            context: "from"
        }
    );
}

#[test]
fn test_select_many_over_json_children() {
    let doc = json!([
        { "id": 1, "children": [11, 12] },
        { "id": 2, "children": [] },
        { "id": 3, "children": [31] },
    ]);
    let children = Sequence::from(&doc)
        .unwrap()
        .select_many(|parent| parent["children"].clone())
        .to_vec()
        .unwrap();
    assert_eq!(children, vec![json!(11), json!(12), json!(31)]);
}

#[test]
fn test_select_many_fails_lazily_at_the_bad_element() {
    let doc = json!([
        { "children": [1, 2] },
        { "children": 7 },
        { "children": [3] },
    ]);
    let query = Sequence::from(doc)
        .unwrap()
        .select_many(|parent| parent["children"].clone());

    let mut iter = query.iter();
    assert_eq!(iter.next(), Some(Ok(json!(1))));
    assert_eq!(iter.next(), Some(Ok(json!(2))));
    let err = iter.next().unwrap().unwrap_err();
    assert_eq!(
        err,
        Error::Construction {
            found: "number",
            context: "select_many"
        }
    );
    // A failed cursor stays done.
    assert_eq!(iter.next(), None);

    assert_eq!(query.to_vec().unwrap_err().kind(), ErrorKind::Construction);
    assert_eq!(query.take(2).count().unwrap(), 2);
}

#[test]
fn test_concat_and_join_check_arguments_eagerly() {
    let seq = Sequence::from(json!([1, 2])).unwrap();

    let err = seq.clone().concat(json!(null)).err().unwrap();
    assert_eq!(err.to_string(), "concat: null is not iterable");

    let err = seq
        .clone()
        .join(json!(true), |x| x.clone(), |y| y.clone(), |x, _| x)
        .err()
        .unwrap();
    assert_eq!(err.to_string(), "join: boolean is not iterable");

    let all = seq.concat(json!([3])).unwrap().to_vec().unwrap();
    assert_eq!(all, vec![json!(1), json!(2), json!(3)]);
}

#[test]
fn test_strings_iterate_characters() {
    let letters = Sequence::from(json!("abc")).unwrap().to_vec().unwrap();
    assert_eq!(letters, vec![json!("a"), json!("b"), json!("c")]);
}

#[derive(Debug, Deserialize)]
struct Order {
    customer: u32,
    total: u32,
}

#[derive(Debug, Deserialize)]
struct Customer {
    id: u32,
    name: String,
}

#[test]
fn test_join_typed_documents() {
    let orders: Vec<Order> = serde_json::from_value(json!([
        { "customer": 2, "total": 30 },
        { "customer": 9, "total": 99 },
        { "customer": 1, "total": 5 },
    ]))
    .unwrap();
    let customers: Vec<Customer> = serde_json::from_value(json!([
        { "id": 1, "name": "ada" },
        { "id": 2, "name": "grace" },
    ]))
    .unwrap();

    let report = Sequence::from(&orders)
        .unwrap()
        .join(
            &customers,
            |o| o.customer,
            |c| c.id,
            |o, c| format!("{} {}", c.name, o.total),
        )
        .unwrap()
        .to_vec()
        .unwrap();
    assert_eq!(report, vec!["grace 30", "ada 5"]);
}
