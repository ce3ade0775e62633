use json_to_ts::{InferError, InferOptions, infer_type, infer_type_with, infer_value, Value};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn flat_object() {
    assert_eq!(infer_type(r#"{"a": 1}"#).unwrap(), "\
type ResponseData = {
  a: number;
};
");
}

#[test]
fn nested_object_is_hoisted_before_root() {
    assert_eq!(infer_type(r#"{"user": {"id": 1, "name": "x"}}"#).unwrap(), "\
type User = {
  id: number;
  name: string;
};
type ResponseData = {
  user: User;
};
");
}

#[test]
fn list_of_numbers() {
    assert_eq!(infer_type(r#"{"list": [1,2,3]}"#).unwrap(), "\
type ResponseData = {
  list: number[];
};
");
}

#[test]
fn list_of_objects_hoists_item() {
    assert_eq!(infer_type(r#"{"list": [{"id":1},{"id":2}]}"#).unwrap(), "\
type ListItem = {
  id: number;
};
type ResponseData = {
  list: ListItem[];
};
");
}

#[test]
fn heterogeneous_array_is_tuple() {
    assert_eq!(infer_type(r#"{"pair": [1, "a"]}"#).unwrap(), "\
type ResponseData = {
  pair: [number, string];
};
");
}

#[test]
fn malformed_input_is_rejected() {
    let err = infer_type("{a:}").unwrap_err();
    assert!(matches!(err, InferError::MalformedInput { line: 1, column: 4, .. }), "{err:?}");
    assert!(err.to_string().starts_with("malformed input at line 1, column 4"));
}

#[test]
fn realistic_relaxed_payload() {
    let src = r#"
        // captured from the orders endpoint
        {
            code: 0,
            msg: 'ok',
            data: {
                page_info: { page: 1, total: 42, },
                order_list: [
                    { id: 1, buyer: { nick_name: 'a' }, tags: ['x', 'y'], paid: true },
                    { id: 2, buyer: { nick_name: 'b' }, tags: ['z', 'w'], paid: false },
                ],
                extra: null,
                "x-trace": [200, "abc", { ok: true }],
            },
        }
    "#;
    assert_eq!(infer_type(src).unwrap(), "\
type PageInfo = {
  page: number;
  total: number;
};
type Buyer = {
  nick_name: string;
};
type OrderListItem = {
  id: number;
  buyer: Buyer;
  tags: string[];
  paid: boolean;
};
type Data = {
  page_info: PageInfo;
  order_list: OrderListItem[];
  extra: null;
  \"x-trace\": [
    number,
    string,
    {
      ok: boolean;
    },
  ];
};
type ResponseData = {
  code: number;
  msg: string;
  data: Data;
};
");
}

#[test]
fn hoisted_names_from_awkward_keys_are_identifiers() {
    let src = r#"{"meta": {"x-trace": {"id": 1}, "2nd": {"a": 1}}}"#;
    assert_eq!(infer_type(src).unwrap(), "\
type XTrace = {
  id: number;
};
type _2nd = {
  a: number;
};
type Meta = {
  \"x-trace\": XTrace;
  \"2nd\": _2nd;
};
type ResponseData = {
  meta: Meta;
};
");
}

#[test]
fn arrays_of_different_lengths_form_a_tuple() {
    assert_eq!(infer_type("{grid: [[1, 2], [3]]}").unwrap(), "\
type ResponseData = {
  grid: [number[], number[]];
};
");
}

#[test]
fn root_level_shapes() {
    assert_eq!(infer_type("[1, 2]").unwrap(), "type ResponseData = number[];\n");
    assert_eq!(infer_type("'x'").unwrap(), "type ResponseData = string;\n");
    assert_eq!(infer_type("[]").unwrap(), "type ResponseData = undefined[];\n");
    assert_eq!(infer_type("{}").unwrap(), "type ResponseData = {};\n");
}

#[test]
fn options_shape_the_output() {
    let options = InferOptions {
        root_name: "Payload".into(),
        indent_width: 4,
        unique_names: true,
        pointer: Some("/data".into()),
    };
    let src = r#"{"data": {"a": {"item": {"x": 1}}, "b": {"item": {"y": "s"}}}}"#;
    assert_eq!(infer_type_with(src, &options).unwrap(), "\
type Item = {
    x: number;
};
type A = {
    item: Item;
};
type Item2 = {
    y: string;
};
type B = {
    item: Item2;
};
type Payload = {
    a: A;
    b: B;
};
");
}

#[test]
fn unresolved_pointer_is_an_error() {
    let options = InferOptions { pointer: Some("/nope".into()), ..InferOptions::default() };
    assert_eq!(
        infer_type_with("{a: 1}", &options),
        Err(InferError::PointerNotFound("/nope".into())),
    );
}

#[test]
fn strict_json_values_can_be_passed_directly() {
    let value = Value::from(json!({"user_name": {"first": "a"}}));
    assert_eq!(infer_value(&value, &InferOptions::default()).unwrap(), "\
type UserName = {
  first: string;
};
type ResponseData = {
  user_name: UserName;
};
");
}

#[test]
fn output_is_deterministic() {
    let src = "{b: [{c: 1}], a: {d: [1, 'x']}}";
    assert_eq!(infer_type(src).unwrap(), infer_type(src).unwrap());
}
