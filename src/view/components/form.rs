use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum TextInputType {
    Text(String),
    Email(String),
    Tel(String),
    Password(String),
}

impl TextInputType {
    fn value(&self) -> &str {
        match self {
            TextInputType::Text(text)
            | TextInputType::Email(text)
            | TextInputType::Tel(text)
            | TextInputType::Password(text) => text,
        }
    }

    fn typ(&self) -> &'static str {
        match self {
            TextInputType::Text(_) => "text",
            TextInputType::Email(_) => "email",
            TextInputType::Tel(_) => "tel",
            TextInputType::Password(_) => "password",
        }
    }
}

#[component]
pub fn TextInput(
    oninput: EventHandler<FormEvent>,
    invalid: Option<Option<String>>,
    value: ReadOnlySignal<TextInputType>,
    placeholder: Option<String>,
    maxlength: Option<u32>,
    numeric: Option<bool>,
) -> Element {
    let value_str = value.read().value().to_owned();
    let typ = value.read().typ();
    let placeholder = placeholder.unwrap_or_default();
    let inputmode = if matches!(numeric, Some(true)) {
        "numeric"
    } else {
        "text"
    };

    let invalid = invalid.flatten().map(|invalid| {
        rsx! {
            p {
                class: "help is-danger",
                "{invalid}"
            }
        }
    });

    let input_class = if invalid.is_some() {
        "input is-danger"
    } else {
        "input"
    };

    rsx! {
        div {
            class: "control",
            input {
                class: "{input_class}",
                value: "{value_str}",
                "type": typ,
                placeholder: "{placeholder}",
                maxlength: maxlength.map(|maxlength| maxlength.to_string()),
                inputmode: inputmode,
                oninput: move |evt| oninput.call(evt),
            }
        }
        { invalid }
    }
}

#[component]
pub fn TextArea(
    oninput: EventHandler<FormEvent>,
    value: ReadOnlySignal<String>,
    placeholder: Option<String>,
) -> Element {
    let placeholder = placeholder.unwrap_or_default();

    rsx! {
        div {
            class: "control",
            textarea {
                class: "textarea",
                rows: 3,
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum CheckStyle {
    Checkbox,
    Radio,
}

#[component]
pub fn CheckInput(
    style: CheckStyle,
    name: Option<String>,
    label: String,
    onclick: EventHandler<MouseEvent>,
    value: bool,
) -> Element {
    let style_str = match style {
        CheckStyle::Checkbox => "checkbox",
        CheckStyle::Radio => "radio",
    };

    rsx! {
        label {
            class: "{style_str} mr-4",
            input {
                class: "mr-1",
                r#type: "{style_str}",
                name: name,
                checked: value,
                onclick: move |evt| onclick.call(evt),
            }
            "{label}"
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonFlavor {
    Primary,
    Info,
    Success,
    Danger,
    Light,
}

#[component]
pub fn Button(
    onclick: EventHandler<MouseEvent>,
    flavor: Option<ButtonFlavor>,
    disabled: Option<bool>,
    is_loading: Option<bool>,
    is_small: Option<bool>,
    children: Element,
) -> Element {
    let mut class = "button".to_owned();

    match flavor {
        None => {}
        Some(ButtonFlavor::Primary) => class.push_str(" is-primary"),
        Some(ButtonFlavor::Info) => class.push_str(" is-info"),
        Some(ButtonFlavor::Success) => class.push_str(" is-success"),
        Some(ButtonFlavor::Danger) => class.push_str(" is-danger"),
        Some(ButtonFlavor::Light) => class.push_str(" is-light"),
    };

    if let Some(true) = is_loading {
        class.push_str(" is-loading");
    }

    if let Some(true) = is_small {
        class.push_str(" is-small");
    }

    rsx! {
         button {
             class: "{class}",
             disabled: disabled.unwrap_or(false) || is_loading.unwrap_or(false),
             "type": "button",
             onclick: move |evt| onclick.call(evt),
             { children }
         }
    }
}

#[component]
pub fn Field(label: ReadOnlySignal<String>, help: Option<String>, children: Element) -> Element {
    let help = help.map(|help| {
        rsx! {
            p {
                class: "help",
                "{help}"
            }
        }
    });

    rsx! {
        div {
            class: "field",
            label {
                class: "label",
                "{label}"
            }
            { children }
            { help }
        }
    }
}
