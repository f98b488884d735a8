//! # Code Document IR
//!
//! Generated TSX is assembled from these pieces rather than concatenated
//! ad hoc. Every piece implements [`CodeGenerable`], so indentation is
//! decided once, by the [`CodeGenContext`] handed to
//! [`CodeDocument::render`].
//!
//! ```text
//! CodeDocument
//!   ├── imports:        Vec<ImportLine>
//!   ├── schema_entries: Vec<SchemaEntry>    → const formSchema = z.object({ ... })
//!   ├── defaults:       Vec<DefaultEntry>   → defaultValues: { ... }
//!   ├── snippets:       Vec<FieldSnippet>   → <FormField ... /> per field
//!   └── submit_label                        → <Button type="submit">
//! ```

use formsmith_core::{CodeGenContext, CodeGenerable, FieldType};

// ============================================================================
// Markup
// ============================================================================

/// One line of markup at a nesting depth relative to its snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupLine {
    pub depth: usize,
    pub text: String,
}

/// Line-oriented markup builder that tracks nesting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    lines: Vec<MarkupLine>,
    depth: usize,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line at the current depth
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(MarkupLine {
            depth: self.depth,
            text: text.into(),
        });
        self
    }

    /// Add a line and nest everything after it
    pub fn open(&mut self, text: impl Into<String>) -> &mut Self {
        self.line(text);
        self.depth += 1;
        self
    }

    /// Un-nest and add a closing line
    pub fn close(&mut self, text: impl Into<String>) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.line(text)
    }

    /// End a multi-line opening tag and nest its children
    pub fn reopen(&mut self, text: impl Into<String>) -> &mut Self {
        self.close(text);
        self.depth += 1;
        self
    }

    pub fn lines(&self) -> &[MarkupLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl CodeGenerable for Markup {
    fn generate(&self, ctx: &CodeGenContext) -> String {
        self.lines
            .iter()
            .map(|line| format!("{}{}", ctx.indented_by(line.depth).indent(), line.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ============================================================================
// Document pieces
// ============================================================================

/// An `import` statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportLine {
    /// `import React from "react"`
    Default { name: String, source: String },
    /// `import * as z from "zod"`
    Namespace { alias: String, source: String },
    /// `import { a, b } from "source"`
    Named { names: Vec<String>, source: String },
}

impl ImportLine {
    pub fn default_import(name: &str, source: &str) -> Self {
        ImportLine::Default {
            name: name.to_string(),
            source: source.to_string(),
        }
    }

    pub fn namespace(alias: &str, source: &str) -> Self {
        ImportLine::Namespace {
            alias: alias.to_string(),
            source: source.to_string(),
        }
    }

    pub fn named(names: &[&str], source: &str) -> Self {
        ImportLine::Named {
            names: names.iter().map(|n| n.to_string()).collect(),
            source: source.to_string(),
        }
    }
}

/// Named imports longer than this are split one per line
const INLINE_IMPORT_LIMIT: usize = 3;

impl CodeGenerable for ImportLine {
    fn generate(&self, ctx: &CodeGenContext) -> String {
        let indent = ctx.indent();
        match self {
            ImportLine::Default { name, source } => {
                format!("{}import {} from \"{}\"", indent, name, source)
            }
            ImportLine::Namespace { alias, source } => {
                format!("{}import * as {} from \"{}\"", indent, alias, source)
            }
            ImportLine::Named { names, source } if names.len() <= INLINE_IMPORT_LIMIT => {
                format!("{}import {{ {} }} from \"{}\"", indent, names.join(", "), source)
            }
            ImportLine::Named { names, source } => {
                let inner = ctx.indented().indent();
                let body: String = names
                    .iter()
                    .map(|n| format!("{}{},\n", inner, n))
                    .collect();
                format!("{}import {{\n{}{}}} from \"{}\"", indent, body, indent, source)
            }
        }
    }
}

/// `name: <zod expression>,` inside the schema object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    pub name: String,
    pub expr: String,
}

impl CodeGenerable for SchemaEntry {
    fn generate(&self, ctx: &CodeGenContext) -> String {
        format!("{}{}: {},", ctx.indent(), self.name, self.expr)
    }
}

/// `name: <literal>,` inside `defaultValues`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultEntry {
    pub name: String,
    pub literal: String,
}

impl CodeGenerable for DefaultEntry {
    fn generate(&self, ctx: &CodeGenContext) -> String {
        format!("{}{}: {},", ctx.indent(), self.name, self.literal)
    }
}

/// The `<FormField>` markup for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnippet {
    pub name: String,
    pub field_type: FieldType,
    pub markup: Markup,
}

impl CodeGenerable for FieldSnippet {
    fn generate(&self, ctx: &CodeGenContext) -> String {
        self.markup.generate(ctx)
    }
}

// ============================================================================
// CodeDocument
// ============================================================================

/// A complete generated component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeDocument {
    pub component_name: String,
    pub schema_name: String,
    pub form_class: String,
    pub submit_label: String,
    pub default_export: bool,
    pub imports: Vec<ImportLine>,
    pub schema_entries: Vec<SchemaEntry>,
    pub defaults: Vec<DefaultEntry>,
    pub snippets: Vec<FieldSnippet>,
}

impl CodeDocument {
    /// Render the document with `indent_width` spaces per level
    pub fn render(&self, indent_width: usize) -> String {
        self.generate(&CodeGenContext::with_indent_width(indent_width))
    }

    fn block<T: CodeGenerable>(items: &[T], ctx: &CodeGenContext) -> String {
        items
            .iter()
            .map(|item| format!("{}\n", item.generate(ctx)))
            .collect()
    }
}

impl CodeGenerable for CodeDocument {
    fn generate(&self, ctx: &CodeGenContext) -> String {
        let i1 = ctx.indented();
        let i2 = ctx.indented_by(2);
        let i3 = ctx.indented_by(3);
        let i4 = ctx.indented_by(4);
        let schema = &self.schema_name;
        let name = &self.component_name;

        let mut out = String::with_capacity(4096);
        out.push_str("\"use client\"\n\n");
        out.push_str(&Self::block(&self.imports, ctx));
        out.push('\n');

        // (b) schema
        out.push_str(&format!("const {} = z.object({{\n", schema));
        out.push_str(&Self::block(&self.schema_entries, &i1));
        out.push_str("})\n\n");

        // (c) component with default values
        out.push_str(&format!("export function {}() {{\n", name));
        out.push_str(&format!(
            "{}const form = useForm<z.infer<typeof {}>>({{\n",
            i1.indent(),
            schema
        ));
        out.push_str(&format!("{}resolver: zodResolver({}),\n", i2.indent(), schema));
        out.push_str(&format!("{}defaultValues: {{\n", i2.indent()));
        out.push_str(&Self::block(&self.defaults, &i3));
        out.push_str(&format!("{}}},\n", i2.indent()));
        out.push_str(&format!("{}}})\n\n", i1.indent()));

        out.push_str(&format!(
            "{}function onSubmit(values: z.infer<typeof {}>) {{\n",
            i1.indent(),
            schema
        ));
        out.push_str(&format!("{}console.log(values)\n", i2.indent()));
        out.push_str(&format!("{}}}\n\n", i1.indent()));

        // (d) field snippets
        out.push_str(&format!("{}return (\n", i1.indent()));
        out.push_str(&format!("{}<Form {{...form}}>\n", i2.indent()));
        out.push_str(&format!(
            "{}<form onSubmit={{form.handleSubmit(onSubmit)}} className=\"{}\">\n",
            i3.indent(),
            self.form_class
        ));
        out.push_str(&Self::block(&self.snippets, &i4));

        // (e) submit stamp
        out.push_str(&format!(
            "{}<Button type=\"submit\">{}</Button>\n",
            i4.indent(),
            self.submit_label
        ));
        out.push_str(&format!("{}</form>\n", i3.indent()));
        out.push_str(&format!("{}</Form>\n", i2.indent()));
        out.push_str(&format!("{})\n", i1.indent()));
        out.push_str("}\n");

        if self.default_export {
            out.push_str(&format!("\nexport default {}\n", name));
        }
        out
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markup_nesting() {
        let mut m = Markup::new();
        m.open("<a>").line("<b />").close("</a>");
        assert_eq!(m.generate(&CodeGenContext::new()), "<a>\n  <b />\n</a>");
        assert_eq!(
            m.generate(&CodeGenContext::with_indent_width(4).indented()),
            "    <a>\n        <b />\n    </a>"
        );
    }

    #[test]
    fn test_import_lines() {
        let ctx = CodeGenContext::new();
        assert_eq!(
            ImportLine::default_import("React", "react").generate(&ctx),
            "import React from \"react\""
        );
        assert_eq!(
            ImportLine::namespace("z", "zod").generate(&ctx),
            "import * as z from \"zod\""
        );
        assert_eq!(
            ImportLine::named(&["Input"], "@/components/ui/input").generate(&ctx),
            "import { Input } from \"@/components/ui/input\""
        );
        assert_eq!(
            ImportLine::named(&["A", "B", "C", "D"], "x").generate(&ctx),
            "import {\n  A,\n  B,\n  C,\n  D,\n} from \"x\""
        );
    }

    #[test]
    fn test_empty_document_shape() {
        let doc = CodeDocument {
            component_name: "SignupForm".to_string(),
            schema_name: "formSchema".to_string(),
            form_class: "space-y-8".to_string(),
            submit_label: "Submit".to_string(),
            default_export: true,
            imports: vec![ImportLine::namespace("z", "zod")],
            schema_entries: vec![],
            defaults: vec![],
            snippets: vec![],
        };
        let expected = "\
\"use client\"

import * as z from \"zod\"

const formSchema = z.object({
})

export function SignupForm() {
  const form = useForm<z.infer<typeof formSchema>>({
    resolver: zodResolver(formSchema),
    defaultValues: {
    },
  })

  function onSubmit(values: z.infer<typeof formSchema>) {
    console.log(values)
  }

  return (
    <Form {...form}>
      <form onSubmit={form.handleSubmit(onSubmit)} className=\"space-y-8\">
        <Button type=\"submit\">Submit</Button>
      </form>
    </Form>
  )
}

export default SignupForm
";
        assert_eq!(doc.render(2), expected);
    }

    #[test]
    fn test_entries_follow_indent_width() {
        let entry = SchemaEntry {
            name: "email".to_string(),
            expr: "z.string()".to_string(),
        };
        let ctx = CodeGenContext::with_indent_width(4).indented();
        assert_eq!(entry.generate(&ctx), "    email: z.string(),");
    }
}
