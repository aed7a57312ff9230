pub static PROP_HTML: &'static str = "innerHTML";
pub static PROP_EDITABLE: &'static str = "contenteditable";
pub static PROP_PLACEHOLDER: &'static str = "placeholder";
pub static PROP_TITLE: &'static str = "title";
pub static PROP_ROLE: &'static str = "role";
pub static PROP_TYPE: &'static str = "type";
pub static PROP_VALUE: &'static str = "value";
pub static PROP_ID: &'static str = "id";
pub static PROP_DISABLED: &'static str = "disabled";

pub static PROP_ROLE_BUTTON: &'static str = "button";

pub static TAG_DIV: &'static str = "div";
pub static TAG_SPAN: &'static str = "span";
pub static TAG_INPUT: &'static str = "input";
pub static TAG_BUTTON: &'static str = "button";
pub static TAG_LABEL: &'static str = "label";

pub static KEY_ENTER: &'static str = "Enter";

pub static CLASS_ICON: &'static str = "material-icons";
pub static CLASS_ACTIVE: &'static str = "active";

pub static EMPTY_CONTENT: &'static str = "<p><br></p>";
