//! # React Templates
//!
//! Stamps out shadcn/ui + react-hook-form markup for each field type, the
//! zod expression for each schema entry, and the fixed import preamble.
//!
//! Field text is user-supplied. Attribute values and text children that
//! would break JSX are emitted as `{"..."}` expressions instead of raw text.

use formsmith_core::{FieldType, js_string};
use formsmith_ir::{Field, FieldSchema};

use crate::snippet::{FieldSnippet, ImportLine, Markup};

// ============================================================================
// Imports
// ============================================================================

/// The import preamble shared by every generated component
pub fn imports() -> Vec<ImportLine> {
    vec![
        ImportLine::default_import("React", "react"),
        ImportLine::named(&["useForm"], "react-hook-form"),
        ImportLine::named(&["zodResolver"], "@hookform/resolvers/zod"),
        ImportLine::namespace("z", "zod"),
        ImportLine::named(&["format"], "date-fns"),
        ImportLine::named(&["CalendarIcon", "Check", "ChevronsUpDown"], "lucide-react"),
        ImportLine::named(&["cn"], "@/lib/utils"),
        ImportLine::named(&["Button"], "@/components/ui/button"),
        ImportLine::named(
            &[
                "Form",
                "FormControl",
                "FormDescription",
                "FormField",
                "FormItem",
                "FormLabel",
                "FormMessage",
            ],
            "@/components/ui/form",
        ),
        ImportLine::named(&["Input"], "@/components/ui/input"),
        ImportLine::named(&["Textarea"], "@/components/ui/textarea"),
        ImportLine::named(&["Checkbox"], "@/components/ui/checkbox"),
        ImportLine::named(&["RadioGroup", "RadioGroupItem"], "@/components/ui/radio-group"),
        ImportLine::named(
            &["Select", "SelectContent", "SelectItem", "SelectTrigger", "SelectValue"],
            "@/components/ui/select",
        ),
        ImportLine::named(&["Switch"], "@/components/ui/switch"),
        ImportLine::named(
            &["Popover", "PopoverContent", "PopoverTrigger"],
            "@/components/ui/popover",
        ),
        ImportLine::named(
            &[
                "Command",
                "CommandEmpty",
                "CommandGroup",
                "CommandInput",
                "CommandItem",
                "CommandList",
            ],
            "@/components/ui/command",
        ),
        ImportLine::named(&["Calendar"], "@/components/ui/calendar"),
        ImportLine::named(&["InputOTP", "InputOTPGroup", "InputOTPSlot"], "@/components/ui/input-otp"),
    ]
}

// ============================================================================
// Schema expressions
// ============================================================================

/// The zod expression for one schema entry
pub fn schema_expression(schema: &FieldSchema) -> String {
    let mut expr = schema.kind.zod_base();
    for constraint in &schema.constraints {
        expr.push_str(&constraint.to_zod());
    }
    if schema.is_optional() {
        if let Some(suffix) = schema.kind.zod_optional_suffix() {
            expr.push_str(suffix);
        }
    }
    expr
}

// ============================================================================
// JSX escaping
// ============================================================================

/// A quoted JSX attribute value
pub fn attr(value: &str) -> String {
    if value.contains(['"', '\\', '\n', '{', '}']) {
        format!("{{{}}}", js_string(value))
    } else {
        format!("\"{}\"", value)
    }
}

/// A JSX text child
pub fn text(value: &str) -> String {
    if value.contains(['{', '}', '<', '>', '\n']) {
        format!("{{{}}}", js_string(value))
    } else {
        value.to_string()
    }
}

// ============================================================================
// Field snippets
// ============================================================================

/// Render the `<FormField>` for a field.
///
/// The match is exhaustive over the closed type set, so every type has a
/// template.
pub fn field_snippet(field: &Field) -> FieldSnippet {
    let mut m = Markup::new();
    m.open("<FormField");
    m.line("control={form.control}");
    m.line(format!("name={}", attr(&field.name)));
    m.open("render={({ field }) => (");

    match field.field_type {
        FieldType::Text | FieldType::Email | FieldType::Password => input(&mut m, field),
        FieldType::Number => number(&mut m, field),
        FieldType::Textarea => textarea(&mut m, field),
        FieldType::Select => select(&mut m, field),
        FieldType::Checkbox => checkbox(&mut m, field),
        FieldType::Radio => radio(&mut m, field),
        FieldType::Combobox => combobox(&mut m, field),
        FieldType::Date => date(&mut m, field),
        FieldType::Otp => otp(&mut m, field),
        FieldType::File => file(&mut m, field),
        FieldType::Switch => switch(&mut m, field),
    }

    m.close(")}");
    m.close("/>");

    FieldSnippet {
        name: field.name.clone(),
        field_type: field.field_type,
        markup: m,
    }
}

fn label(m: &mut Markup, field: &Field) {
    m.line(format!("<FormLabel>{}</FormLabel>", text(&field.label)));
}

fn description(m: &mut Markup, field: &Field) {
    if let Some(d) = field.description.as_deref().filter(|d| !d.is_empty()) {
        m.line(format!("<FormDescription>{}</FormDescription>", text(d)));
    }
}

fn footer(m: &mut Markup, field: &Field) {
    description(m, field);
    m.line("<FormMessage />");
}

fn disabled(field: &Field) -> String {
    format!("disabled={{{}}}", field.disabled)
}

fn class_name(field: &Field) -> String {
    format!("className={}", attr(field.class_name_or_empty()))
}

fn placeholder(field: &Field) -> String {
    format!("placeholder={}", attr(field.placeholder_or_empty()))
}

fn input(m: &mut Markup, field: &Field) {
    m.open("<FormItem>");
    label(m, field);
    m.open("<FormControl>");
    m.open("<Input");
    m.line(format!("type=\"{}\"", field.field_type.as_str()));
    m.line(placeholder(field));
    m.line(class_name(field));
    m.line(disabled(field));
    m.line("{...field}");
    m.close("/>");
    m.close("</FormControl>");
    footer(m, field);
    m.close("</FormItem>");
}

fn number(m: &mut Markup, field: &Field) {
    m.open("<FormItem>");
    label(m, field);
    m.open("<FormControl>");
    m.open("<Input");
    m.line("type=\"number\"");
    m.line(placeholder(field));
    m.line(class_name(field));
    m.line(disabled(field));
    m.line("{...field}");
    m.line(
        "onChange={(event) => field.onChange(event.target.value === \"\" ? \"\" : event.target.valueAsNumber)}",
    );
    m.close("/>");
    m.close("</FormControl>");
    footer(m, field);
    m.close("</FormItem>");
}

fn textarea(m: &mut Markup, field: &Field) {
    m.open("<FormItem>");
    label(m, field);
    m.open("<FormControl>");
    m.open("<Textarea");
    m.line(placeholder(field));
    m.line(class_name(field));
    m.line(disabled(field));
    m.line("{...field}");
    m.close("/>");
    m.close("</FormControl>");
    footer(m, field);
    m.close("</FormItem>");
}

fn select(m: &mut Markup, field: &Field) {
    m.open("<FormItem>");
    label(m, field);
    m.open(format!(
        "<Select onValueChange={{field.onChange}} defaultValue={{field.value}} {}>",
        disabled(field)
    ));
    m.open("<FormControl>");
    m.open(format!("<SelectTrigger {}>", class_name(field)));
    m.line(format!("<SelectValue {} />", placeholder(field)));
    m.close("</SelectTrigger>");
    m.close("</FormControl>");
    m.open("<SelectContent>");
    for option in &field.options {
        m.line(format!(
            "<SelectItem value={}>{}</SelectItem>",
            attr(option),
            text(option)
        ));
    }
    m.close("</SelectContent>");
    m.close("</Select>");
    footer(m, field);
    m.close("</FormItem>");
}

fn checkbox(m: &mut Markup, field: &Field) {
    m.open("<FormItem className=\"flex flex-row items-start space-x-3 space-y-0 rounded-md border p-4\">");
    m.open("<FormControl>");
    m.open("<Checkbox");
    m.line("checked={field.value}");
    m.line("onCheckedChange={field.onChange}");
    m.line(class_name(field));
    m.line(disabled(field));
    m.close("/>");
    m.close("</FormControl>");
    m.open("<div className=\"space-y-1 leading-none\">");
    label(m, field);
    footer(m, field);
    m.close("</div>");
    m.close("</FormItem>");
}

fn radio(m: &mut Markup, field: &Field) {
    m.open("<FormItem className=\"space-y-3\">");
    label(m, field);
    m.open("<FormControl>");
    m.open("<RadioGroup");
    m.line("onValueChange={field.onChange}");
    m.line("defaultValue={field.value}");
    m.line(format!(
        "className={}",
        attr(&join_classes("flex flex-col space-y-1", field.class_name_or_empty()))
    ));
    m.line(disabled(field));
    m.reopen(">");
    for option in &field.options {
        m.open("<FormItem className=\"flex items-center space-x-3 space-y-0\">");
        m.open("<FormControl>");
        m.line(format!("<RadioGroupItem value={} />", attr(option)));
        m.close("</FormControl>");
        m.line(format!(
            "<FormLabel className=\"font-normal\">{}</FormLabel>",
            text(option)
        ));
        m.close("</FormItem>");
    }
    m.close("</RadioGroup>");
    m.close("</FormControl>");
    footer(m, field);
    m.close("</FormItem>");
}

fn combobox(m: &mut Markup, field: &Field) {
    let name = js_string(&field.name);
    let prompt = js_string(field.placeholder.as_deref().unwrap_or("Select option"));

    m.open("<FormItem className=\"flex flex-col\">");
    label(m, field);
    m.open("<Popover>");
    m.open("<PopoverTrigger asChild>");
    m.open("<FormControl>");
    m.open("<Button");
    m.line("variant=\"outline\"");
    m.line("role=\"combobox\"");
    m.line(format!(
        "className={{cn(\"w-full justify-between\", !field.value && \"text-muted-foreground\", {})}}",
        js_string(field.class_name_or_empty())
    ));
    m.line(disabled(field));
    m.reopen(">");
    m.line(format!("{{field.value || {}}}", prompt));
    m.line("<ChevronsUpDown className=\"ml-2 h-4 w-4 shrink-0 opacity-50\" />");
    m.close("</Button>");
    m.close("</FormControl>");
    m.close("</PopoverTrigger>");
    m.open("<PopoverContent className=\"w-full p-0\">");
    m.open("<Command>");
    m.line("<CommandInput placeholder=\"Search option...\" />");
    m.open("<CommandList>");
    m.line("<CommandEmpty>No option found.</CommandEmpty>");
    m.open("<CommandGroup>");
    for option in &field.options {
        let value = js_string(option);
        m.open("<CommandItem");
        m.line(format!("value={}", attr(option)));
        m.line(format!("key={}", attr(option)));
        m.line(format!("onSelect={{() => form.setValue({}, {})}}", name, value));
        m.reopen(">");
        m.line(format!(
            "<Check className={{cn(\"mr-2 h-4 w-4\", field.value === {} ? \"opacity-100\" : \"opacity-0\")}} />",
            value
        ));
        m.line(text(option));
        m.close("</CommandItem>");
    }
    m.close("</CommandGroup>");
    m.close("</CommandList>");
    m.close("</Command>");
    m.close("</PopoverContent>");
    m.close("</Popover>");
    footer(m, field);
    m.close("</FormItem>");
}

fn date(m: &mut Markup, field: &Field) {
    let prompt = text(field.placeholder.as_deref().unwrap_or("Pick a date"));

    m.open("<FormItem className=\"flex flex-col\">");
    label(m, field);
    m.open("<Popover>");
    m.open("<PopoverTrigger asChild>");
    m.open("<FormControl>");
    m.open("<Button");
    m.line("variant=\"outline\"");
    m.line(format!(
        "className={{cn(\"w-full pl-3 text-left font-normal\", !field.value && \"text-muted-foreground\", {})}}",
        js_string(field.class_name_or_empty())
    ));
    m.line(disabled(field));
    m.reopen(">");
    m.line(format!(
        "{{field.value ? format(new Date(field.value), \"PPP\") : <span>{}</span>}}",
        prompt
    ));
    m.line("<CalendarIcon className=\"ml-auto h-4 w-4 opacity-50\" />");
    m.close("</Button>");
    m.close("</FormControl>");
    m.close("</PopoverTrigger>");
    m.open("<PopoverContent className=\"w-auto p-0\" align=\"start\">");
    m.open("<Calendar");
    m.line("mode=\"single\"");
    m.line("selected={field.value ? new Date(field.value) : undefined}");
    m.line("onSelect={(date) => field.onChange(date ? date.toISOString() : null)}");
    m.line("initialFocus");
    m.close("/>");
    m.close("</PopoverContent>");
    m.close("</Popover>");
    footer(m, field);
    m.close("</FormItem>");
}

fn otp(m: &mut Markup, field: &Field) {
    let length = field.otp_length();

    m.open("<FormItem>");
    label(m, field);
    m.open("<FormControl>");
    m.open(format!(
        "<InputOTP maxLength={{{}}} {} {} {{...field}}>",
        length,
        class_name(field),
        disabled(field)
    ));
    m.open("<InputOTPGroup>");
    for index in 0..length {
        m.line(format!("<InputOTPSlot index={{{}}} />", index));
    }
    m.close("</InputOTPGroup>");
    m.close("</InputOTP>");
    m.close("</FormControl>");
    footer(m, field);
    m.close("</FormItem>");
}

fn file(m: &mut Markup, field: &Field) {
    m.open("<FormItem>");
    label(m, field);
    m.open("<FormControl>");
    m.open("<Input");
    m.line("type=\"file\"");
    m.line(class_name(field));
    m.line(disabled(field));
    m.line("onChange={(event) => field.onChange(event.target.files?.[0] ?? null)}");
    m.close("/>");
    m.close("</FormControl>");
    footer(m, field);
    m.close("</FormItem>");
}

fn switch(m: &mut Markup, field: &Field) {
    m.open("<FormItem className=\"flex flex-row items-center justify-between rounded-lg border p-4\">");
    m.open("<div className=\"space-y-0.5\">");
    m.line(format!(
        "<FormLabel className=\"text-base\">{}</FormLabel>",
        text(&field.label)
    ));
    description(m, field);
    m.close("</div>");
    m.open("<FormControl>");
    m.open("<Switch");
    m.line("checked={field.value}");
    m.line("onCheckedChange={field.onChange}");
    m.line(class_name(field));
    m.line(disabled(field));
    m.close("/>");
    m.close("</FormControl>");
    m.line("<FormMessage />");
    m.close("</FormItem>");
}

fn join_classes(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_core::{CodeGenContext, CodeGenerable};
    use formsmith_ir::FieldValidation;
    use pretty_assertions::assert_eq;

    fn render(field: &Field) -> String {
        field_snippet(field).generate(&CodeGenContext::new())
    }

    #[test]
    fn test_text_input_snippet() {
        let field = Field::new(FieldType::Email, "email", "Email")
            .with_placeholder("you@example.com")
            .with_description("We never share it");
        let expected = "\
<FormField
  control={form.control}
  name=\"email\"
  render={({ field }) => (
    <FormItem>
      <FormLabel>Email</FormLabel>
      <FormControl>
        <Input
          type=\"email\"
          placeholder=\"you@example.com\"
          className=\"\"
          disabled={false}
          {...field}
        />
      </FormControl>
      <FormDescription>We never share it</FormDescription>
      <FormMessage />
    </FormItem>
  )}
/>";
        assert_eq!(render(&field), expected);
    }

    #[test]
    fn test_select_lists_options_in_order() {
        let field = Field::new(FieldType::Select, "color", "Color").with_options(["Red", "Green"]);
        let out = render(&field);
        let red = out.find("<SelectItem value=\"Red\">Red</SelectItem>").unwrap();
        let green = out.find("<SelectItem value=\"Green\">Green</SelectItem>").unwrap();
        assert!(red < green);
    }

    #[test]
    fn test_radio_items() {
        let field = Field::new(FieldType::Radio, "size", "Size").with_options(["S", "M", "L"]);
        let out = render(&field);
        assert_eq!(out.matches("<RadioGroupItem value=").count(), 3);
        assert!(out.contains("className=\"flex flex-col space-y-1\""));
    }

    #[test]
    fn test_otp_slots() {
        let field = Field::new(FieldType::Otp, "code", "Code")
            .with_validation(FieldValidation::new().with_max_length(4));
        let out = render(&field);
        assert!(out.contains("<InputOTP maxLength={4}"));
        assert!(out.contains("<InputOTPSlot index={3} />"));
        assert!(!out.contains("<InputOTPSlot index={4} />"));
    }

    #[test]
    fn test_combobox_sets_value_by_name() {
        let field = Field::new(FieldType::Combobox, "lang", "Language").with_options(["Rust"]);
        let out = render(&field);
        assert!(out.contains("onSelect={() => form.setValue(\"lang\", \"Rust\")}"));
        assert!(out.contains("{field.value || \"Select option\"}"));
    }

    #[test]
    fn test_every_type_has_a_template() {
        for t in FieldType::palette() {
            let field = formsmith_ir::create_field(*t);
            let snippet = field_snippet(&field);
            assert_eq!(snippet.field_type, *t);
            let out = snippet.generate(&CodeGenContext::new());
            assert!(out.starts_with("<FormField"), "{} snippet", t);
            assert!(out.ends_with("/>"), "{} snippet", t);
            assert!(out.contains(&format!("name=\"{}\"", field.name)));
        }
    }

    #[test]
    fn test_disabled_flag_is_interpolated() {
        let field = Field::new(FieldType::Switch, "news", "News").disabled();
        assert!(render(&field).contains("disabled={true}"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        assert_eq!(attr("plain"), "\"plain\"");
        assert_eq!(attr("say \"hi\""), "{\"say \\\"hi\\\"\"}");
        assert_eq!(text("a < b"), "{\"a < b\"}");
        assert_eq!(text("Full name"), "Full name");

        let field = Field::new(FieldType::Text, "q", "Quote {x}").with_placeholder("\"quoted\"");
        let out = render(&field);
        assert!(out.contains("<FormLabel>{\"Quote {x}\"}</FormLabel>"));
        assert!(out.contains("placeholder={\"\\\"quoted\\\"\"}"));
    }

    #[test]
    fn test_schema_expressions() {
        let agree = Field::new(FieldType::Checkbox, "agree", "Agree").required();
        let schema = FieldSchema::for_field(&agree).unwrap();
        assert_eq!(
            schema_expression(&schema),
            "z.boolean({ invalid_type_error: \"Expected a boolean\" })\
.refine((value) => value === true, { message: \"This field is required\" })"
        );

        let bio = Field::new(FieldType::Textarea, "bio", "Bio");
        let schema = FieldSchema::for_field(&bio).unwrap();
        assert_eq!(
            schema_expression(&schema),
            "z.string({ invalid_type_error: \"Expected a string\" }).optional().or(z.literal(\"\"))"
        );
    }
    #[test]
    fn test_preview_checks_agree_with_zod() {
        use serde_json::{Value, json};

        let otp = Field::new(FieldType::Otp, "code", "Code")
            .with_validation(FieldValidation::new().with_max_length(4));

        // (field, zod expression, values zod accepts, values zod rejects)
        let cases: Vec<(Field, &str, Vec<Value>, Vec<Value>)> = vec![
            (
                Field::new(FieldType::Text, "bio", "Bio"),
                r#"z.string({ invalid_type_error: "Expected a string" }).optional().or(z.literal(""))"#,
                vec![json!(""), json!("hi")],
                vec![Value::Null, json!(5)],
            ),
            (
                Field::new(FieldType::Text, "name", "Name").required(),
                r#"z.string({ invalid_type_error: "Expected a string" }).min(1, { message: "This field is required" })"#,
                vec![json!("Ada")],
                vec![json!(""), Value::Null],
            ),
            (
                Field::new(FieldType::Number, "qty", "Qty").required(),
                r#"z.number({ invalid_type_error: "Expected a number" }).min(Number.MIN_SAFE_INTEGER, { message: "This field is required" })"#,
                vec![json!(7)],
                vec![json!("7"), json!(""), Value::Null],
            ),
            (
                Field::new(FieldType::Number, "qty", "Qty"),
                r#"z.number({ invalid_type_error: "Expected a number" }).optional().or(z.literal(""))"#,
                vec![json!(7), json!("")],
                vec![json!("7"), Value::Null],
            ),
            (
                Field::new(FieldType::Switch, "news", "News").required(),
                r#"z.boolean({ invalid_type_error: "Expected a boolean" }).refine((value) => value === true, { message: "This field is required" })"#,
                vec![json!(true)],
                vec![json!(false), json!("true")],
            ),
            (
                Field::new(FieldType::Date, "dob", "Birthday"),
                r#"z.string({ invalid_type_error: "Invalid date" }).nullable().refine((value) => !value || !Number.isNaN(Date.parse(value)), { message: "Invalid date" })"#,
                vec![Value::Null, json!(""), json!("2024-02-29")],
                vec![json!("tomorrow"), json!(5)],
            ),
            (
                Field::new(FieldType::File, "cv", "CV").required(),
                r#"z.instanceof(File, { message: "Expected a file" }).nullable().refine((value) => value !== null, { message: "This field is required" })"#,
                vec![json!("cv.pdf")],
                vec![Value::Null, json!(12)],
            ),
            (
                otp,
                r#"z.string({ invalid_type_error: "Expected a string" }).length(4, { message: "Must be exactly 4 characters" }).regex(/^\d*$/, { message: "Only digits are allowed" })"#,
                vec![json!("1234")],
                vec![json!("12a4"), json!(""), Value::Null],
            ),
        ];

        for (field, expected, accepted, rejected) in cases {
            let schema = FieldSchema::for_field(&field).unwrap();
            assert_eq!(schema_expression(&schema), expected);
            for value in &accepted {
                assert!(schema.check(value).is_ok(), "{} should accept {}", field.name, value);
            }
            for value in &rejected {
                assert!(schema.check(value).is_err(), "{} should reject {}", field.name, value);
            }
        }
    }
}
