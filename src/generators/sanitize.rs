//! Sanitizer for user-supplied rich text.
//!
//! The form accepts a restricted HTML subset in the free-text fields; the
//! layout engine's paragraph parser accepts an even smaller vocabulary and
//! treats anything else as a render failure. This pass sits between the
//! two: it keeps the allowed inline tags, strips every attribute not on the
//! allow-list, flattens block wrappers and normalizes whitespace, so that
//! whatever survives is guaranteed to parse downstream.

use kuchiki::traits::TendrilSink;
use kuchiki::{NodeData, NodeRef};
use lazy_static::lazy_static;
use std::collections::HashMap;

use super::models::FieldSet;

/// Fields carrying rich text; everything else is used verbatim.
pub const CAMPOS_RICOS: [&str; 6] = [
    "titulo",
    "subtitulo",
    "titulo_traduzido",
    "subtitulo_traduzido",
    "resumo",
    "abstract",
];

lazy_static! {
    /// Attributes kept per allowed tag; tags absent here keep none.
    static ref ATRIBUTOS_PERMITIDOS: HashMap<&'static str, &'static [&'static str]> = {
        let mut m: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        m.insert("a", &["href"]);
        m.insert("font", &["color", "face", "size"]);
        m
    };
}

/// Sanitize every rich-text field of a submission, leaving the rest alone.
pub fn sanitizar_campos(dados: &FieldSet) -> FieldSet {
    let mut limpos = dados.clone();
    for campo in CAMPOS_RICOS {
        let valor = dados.get(campo);
        if !valor.is_empty() {
            limpos.set(campo, sanitize_markup(valor));
        }
    }
    limpos
}

/// Sanitize a single rich-text fragment. Pure and idempotent.
pub fn sanitize_markup(input: &str) -> String {
    // Raw newlines are never line breaks for the renderer; only <br/> is.
    let collapsed = input.replace(['\n', '\r'], " ");
    let document = kuchiki::parse_html().one(format!("<body>{collapsed}</body>"));
    let body = match document.select_first("body") {
        Ok(body) => body,
        Err(()) => return String::new(),
    };
    let mut out = String::new();
    emit_children(body.as_node(), &mut out);
    out
}

fn emit_children(node: &NodeRef, out: &mut String) {
    for child in node.children() {
        match child.data() {
            NodeData::Text(text) => escape_text(&text.borrow(), out),
            NodeData::Element(el) => {
                let name = el.name.local.to_ascii_lowercase();
                match &*name {
                    "br" => out.push_str("<br/>"),
                    "b" | "i" | "u" => {
                        out.push('<');
                        out.push_str(&name);
                        out.push('>');
                        emit_children(&child, out);
                        out.push_str("</");
                        out.push_str(&name);
                        out.push('>');
                    }
                    "a" | "font" => {
                        out.push('<');
                        out.push_str(&name);
                        let permitidos = ATRIBUTOS_PERMITIDOS
                            .get(&*name)
                            .copied()
                            .unwrap_or(&[]);
                        let attrs = el.attributes.borrow();
                        for (attr_name, attr) in &attrs.map {
                            let local: &str = attr_name.local.as_ref();
                            if permitidos.contains(&local) {
                                out.push(' ');
                                out.push_str(local);
                                out.push_str("=\"");
                                escape_attr(&attr.value, out);
                                out.push('"');
                            }
                        }
                        drop(attrs);
                        out.push('>');
                        emit_children(&child, out);
                        out.push_str("</");
                        out.push_str(&name);
                        out.push('>');
                    }
                    // Block wrappers flatten to their inline content plus a
                    // single space, keeping word separation visible.
                    "p" | "div" => {
                        emit_children(&child, out);
                        out.push(' ');
                    }
                    _ => emit_children(&child, out),
                }
            }
            _ => {}
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '\n' | '\r' => out.push(' '),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_markup_passes_through() {
        let entrada = "texto com <b>negrito</b> e <u>sublinhado</u>";
        assert_eq!(sanitize_markup(entrada), entrada);
    }

    #[test]
    fn disallowed_attributes_are_stripped() {
        let saida = sanitize_markup(r#"<a href="http://x" onclick="roubar()">link</a>"#);
        assert_eq!(saida, r#"<a href="http://x">link</a>"#);
    }

    #[test]
    fn font_keeps_only_allowed_attributes() {
        let saida = sanitize_markup(r#"<font color="blue" style="x">azul</font>"#);
        assert_eq!(saida, r#"<font color="blue">azul</font>"#);
    }

    #[test]
    fn block_tags_flatten_with_trailing_space() {
        let saida = sanitize_markup("<p>um</p><p>dois</p>");
        assert_eq!(saida, "um dois ");
    }

    #[test]
    fn br_is_normalized_to_self_closing() {
        assert_eq!(sanitize_markup("a<br>b"), "a<br/>b");
    }

    #[test]
    fn raw_newlines_collapse_to_spaces() {
        assert_eq!(sanitize_markup("linha\numa\routra"), "linha uma outra");
    }

    #[test]
    fn unknown_tags_are_unwrapped() {
        assert_eq!(
            sanitize_markup("<span data-x=\"1\">texto</span> <script>x</script>"),
            "texto x"
        );
    }

    #[test]
    fn is_idempotent() {
        let entradas = [
            "simples",
            "a & b < c",
            "<p>bloco</p> com <b>tags</b><br>finais",
            r#"<a href="http://repositorio.ipen.br/" color="blue"><u>url</u></a>"#,
            "com&nbsp;nbsp",
        ];
        for entrada in entradas {
            let uma = sanitize_markup(entrada);
            let duas = sanitize_markup(&uma);
            assert_eq!(uma, duas, "entrada: {entrada}");
        }
    }

    #[test]
    fn sanitizes_only_rich_fields() {
        let mut dados = FieldSet::new();
        dados.set("titulo", "<p>Título</p>");
        dados.set("nome_completo", "<p>Nome</p>");
        let limpos = sanitizar_campos(&dados);
        assert_eq!(limpos.get("titulo"), "Título ");
        assert_eq!(limpos.get("nome_completo"), "<p>Nome</p>");
    }
}
