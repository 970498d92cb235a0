use propkit::*;
use serde_json::{json, Value};
use std::thread;

fn movie_card_spec() -> PropSpec {
    let defaults = json!({ "posterSrc": "placeholder.png" });
    PropSpec::from_defaults(
        ["title", "posterSrc", "genres"],
        defaults.as_object().cloned().unwrap_or_default(),
    )
    .unwrap()
}

fn inputs() -> Vec<InputBag> {
    vec![
        props! {},
        props! { "title" => "Mad Max", "genres" => ["Action", "Thriller"] },
        props! { "title" => "Mad Max", "posterSrc" => "custom.png", "genres" => [] },
        props! { "posterSrc" => "", "rating" => 8.1 },
        InputBag::new()
            .with("title", Value::Null)
            .with_absent("posterSrc")
            .with("genres", json!({ "primary": "Drama" })),
    ]
}

#[test]
fn resolved_names_are_exactly_the_declared_names() {
    let spec = movie_card_spec();
    for input in inputs() {
        let resolved = resolve(&spec, &input);
        assert_eq!(
            resolved.names().collect::<Vec<_>>(),
            spec.names().collect::<Vec<_>>()
        );
    }
}

#[test]
fn every_prop_resolves_by_the_same_rule() {
    let spec = movie_card_spec();
    for input in inputs() {
        let resolved = resolve(&spec, &input);
        for param in spec.params() {
            let expected = input.get(param.name()).or(param.default());
            assert_eq!(resolved.get(param.name()), expected, "prop {}", param.name());
        }
    }
}

#[test]
fn resolution_has_no_memory() {
    let spec = movie_card_spec();
    let inputs = inputs();
    let first: Vec<_> = inputs.iter().map(|input| resolve(&spec, input)).collect();
    let second: Vec<_> = inputs.iter().map(|input| resolve(&spec, input)).collect();
    assert_eq!(first, second);
}

#[test]
fn movie_card_scenarios() {
    let spec = movie_card_spec();

    let input = props! { "title" => "Mad Max", "genres" => ["Action", "Thriller"] };
    assert_eq!(
        resolve(&spec, &input).to_json(),
        json!({
            "title": "Mad Max",
            "posterSrc": "placeholder.png",
            "genres": ["Action", "Thriller"],
        })
    );

    let input = props! { "title" => "Mad Max", "posterSrc" => "custom.png", "genres" => [] };
    assert_eq!(
        resolve(&spec, &input).to_json(),
        json!({ "title": "Mad Max", "posterSrc": "custom.png", "genres": [] })
    );

    let input = props! {};
    let resolved = resolve(&spec, &input);
    assert_eq!(
        resolved.iter().collect::<Vec<_>>(),
        [
            ("title", None),
            ("posterSrc", Some(&json!("placeholder.png"))),
            ("genres", None),
        ]
    );
    assert_eq!(resolved.absent().collect::<Vec<_>>(), ["title", "genres"]);
}

#[test]
fn construction_styles_agree() {
    let built = PropSpec::builder()
        .param("title")
        .param_with_default("posterSrc", json!("placeholder.png"))
        .param("genres")
        .build()
        .unwrap();
    let listed = PropSpec::new([
        ParamSpec::required("title"),
        ParamSpec::with_default("posterSrc", json!("placeholder.png")),
        ParamSpec::required("genres"),
    ])
    .unwrap();
    assert_eq!(built, movie_card_spec());
    assert_eq!(listed, movie_card_spec());
}

#[test]
fn shared_spec_resolves_from_many_threads() {
    let spec = movie_card_spec();
    let titles: Vec<String> = (0..8).map(|i| format!("Movie {}", i)).collect();

    let resolved: Vec<Value> = thread::scope(|scope| {
        let handles: Vec<_> = titles
            .iter()
            .map(|title| {
                let spec = &spec;
                scope.spawn(move || {
                    let input = InputBag::new().with("title", json!(title));
                    resolve(spec, &input).to_json()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for (title, resolved) in titles.iter().zip(resolved) {
        assert_eq!(
            resolved,
            json!({ "title": title, "posterSrc": "placeholder.png" })
        );
    }
}

#[test]
fn errors_describe_the_prop() {
    assert_eq!(
        SpecError::DuplicateParameter("title".to_owned()).to_string(),
        "prop `title` is declared more than once"
    );
    assert_eq!(
        PropError::MissingProp("title".to_owned()).to_string(),
        "prop `title` was not supplied and has no default"
    );
    assert_eq!(
        PropError::InvalidProp {
            name: "genres".to_owned(),
            expected: "an array",
        }
        .to_string(),
        "prop `genres` is invalid: expected an array"
    );
}
