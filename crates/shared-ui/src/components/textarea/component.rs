use dioxus::prelude::*;

/// A controlled multi-line text input.
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = 5)] rows: i64,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes, extends = textarea)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "textarea", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        textarea {
            value: value,
            placeholder: placeholder,
            rows: rows,
            disabled: disabled,
            oninput: move |evt| on_input.call(evt),
            ..merged,
        }
    }
}
