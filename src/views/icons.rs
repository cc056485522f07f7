use crate::models::Icon;

fn svg(class: &str, stroke_width: &str, inner: &str) -> String {
    format!(
        "<svg class=\"{class}\" xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\" \
         fill=\"none\" stroke=\"currentColor\" stroke-width=\"{stroke_width}\" \
         stroke-linecap=\"round\" stroke-linejoin=\"round\" aria-hidden=\"true\">{inner}</svg>"
    )
}

fn paths(icon: Icon) -> &'static str {
    match icon {
        Icon::Users => {
            "<path d=\"M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2\"/>\
             <circle cx=\"9\" cy=\"7\" r=\"4\"/>\
             <path d=\"M22 21v-2a4 4 0 0 0-3-3.87\"/>\
             <path d=\"M16 3.13a4 4 0 0 1 0 7.75\"/>"
        }
        Icon::Zap => "<polygon points=\"13 2 3 14 12 14 11 22 21 10 12 10 13 2\"/>",
        Icon::Target => {
            "<circle cx=\"12\" cy=\"12\" r=\"10\"/>\
             <circle cx=\"12\" cy=\"12\" r=\"6\"/>\
             <circle cx=\"12\" cy=\"12\" r=\"2\"/>"
        }
    }
}

pub fn feature_icon(icon: Icon, class: &str, stroke_width: &str) -> String {
    svg(class, stroke_width, paths(icon))
}

pub fn arrow_up_right(class: &str) -> String {
    svg(class, "2", "<path d=\"M7 7h10v10\"/><path d=\"M7 17 17 7\"/>")
}

pub fn calendar(class: &str) -> String {
    svg(
        class,
        "2",
        "<rect x=\"3\" y=\"4\" width=\"18\" height=\"18\" rx=\"2\"/>\
         <path d=\"M16 2v4\"/><path d=\"M8 2v4\"/><path d=\"M3 10h18\"/>",
    )
}

pub fn clock(class: &str) -> String {
    svg(
        class,
        "2",
        "<circle cx=\"12\" cy=\"12\" r=\"10\"/><path d=\"M12 6v6l4 2\"/>",
    )
}

pub fn heart(class: &str) -> String {
    format!(
        "<svg class=\"{class}\" fill=\"currentColor\" viewBox=\"0 0 20 20\" aria-hidden=\"true\">\
         <path d=\"M3.172 5.172a4 4 0 015.656 0L10 6.343l1.172-1.171a4 4 0 115.656 5.656L10 17.657l-6.828-6.829a4 4 0 010-5.656z\"/>\
         </svg>"
    )
}
