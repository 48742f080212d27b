//! Fill-in rendering of the form template.
//!
//! The template is plain HTML with `{{...}}` tokens:
//! - `{{flash}}` - the flash area (empty or one error line)
//! - `{{campo}}` - the escaped value of a field
//! - `{{sel campo valor}}` - ` selected` when the field equals the value
//! - `{{chk tag}}` - ` checked` when the document tag was requested

use crate::generators::{DocumentKind, FieldSet};

pub fn render_form(
    template: &str,
    dados: &FieldSet,
    tipos: &[DocumentKind],
    erro: Option<&str>,
) -> String {
    let flash = match erro {
        Some(mensagem) => format!(
            "<div class=\"flash erro\">{}</div>",
            html_escape(mensagem)
        ),
        None => String::new(),
    };

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(inicio) = rest.find("{{") {
        out.push_str(&rest[..inicio]);
        let depois = &rest[inicio + 2..];
        match depois.find("}}") {
            Some(fim) => {
                expand_token(&depois[..fim], dados, tipos, &flash, &mut out);
                rest = &depois[fim + 2..];
            }
            None => {
                out.push_str(&rest[inicio..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn expand_token(
    token: &str,
    dados: &FieldSet,
    tipos: &[DocumentKind],
    flash: &str,
    out: &mut String,
) {
    if token == "flash" {
        out.push_str(flash);
        return;
    }
    if let Some(resto) = token.strip_prefix("sel ") {
        if let Some((campo, valor)) = resto.split_once(' ') {
            if dados.get(campo) == valor {
                out.push_str(" selected");
            }
        }
        return;
    }
    if let Some(tag) = token.strip_prefix("chk ") {
        if tipos.iter().any(|k| k.tag() == tag) {
            out.push_str(" checked");
        }
        return;
    }
    out.push_str(&html_escape(dados.get(token)));
}

pub fn html_escape(texto: &str) -> String {
    let mut out = String::with_capacity(texto.len());
    for ch in texto.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
