use maud::{html, Markup, DOCTYPE};

pub fn headers() -> Markup {
    html! {
        meta name="viewport" content="width=device-width, initial-scale=1";
        meta charset="UTF-8";
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css" crossorigin="anonymous" referrerpolicy="no-referrer";
        link rel="stylesheet" href="https://unpkg.com/bulma-prefers-dark";
    }
}

/// Wraps the body into a complete HTML document.
pub fn document(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (headers())
                title { (title) }
            }
            body {
                (body)
            }
        }
    }
}

/// Labelled numeric input.
pub fn number_field(name: &str, label: &str, placeholder: &str) -> Markup {
    html! {
        div.field {
            label.label for=(name) { (label) }
            div.control {
                input.input
                    type="number"
                    step="any"
                    id=(name)
                    name=(name)
                    placeholder=(placeholder)
                    required;
            }
        }
    }
}
