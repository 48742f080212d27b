//! Catalog card: license paragraph, citation, and the boxed bibliographic
//! block with the roman-numeral index line.

use crate::pdf::{
    cm, Align, Canvas, CoreFont, Paragraph, ParagraphStyle, PdfError, A4_HEIGHT, A4_WIDTH,
};

use super::citation::texto_citacao;
use super::common::{filtrar_chaves, indice_romano, programa_pos, titulo_completo};
use super::models::{FieldSet, Idioma};
use super::traits::Gerador;

pub struct FichaGenerator;

impl Gerador for FichaGenerator {
    fn gerar(&self, dados: &FieldSet) -> Result<Vec<u8>, PdfError> {
        let mut c = Canvas::new();
        let (width, height) = (A4_WIDTH, A4_HEIGHT);
        let margem_esq = cm(2.5);
        let largura_texto = width - 2.0 * margem_esq;
        let mut y = height - cm(2.5);

        let s_normal = ParagraphStyle::new(CoreFont::Helvetica, 11.0, 13.0, Align::Left);

        if !dados.is_blank("bolsa") {
            c.text(
                CoreFont::Helvetica,
                11.0,
                margem_esq,
                y,
                &format!("Fonte de Financiamento: {}", dados.get("bolsa")),
            );
            y -= 25.0;
        }

        let texto_licenca = format!(
            "Autorizo a reprodução e divulgação deste trabalho acadêmico, total ou \
             parcialmente, sob os termos da licença <b>{}</b>, permitindo seu uso e \
             compartilhamento, desde que os devidos créditos sejam atribuídos e as \
             condições estabelecidas na licença sejam respeitadas.",
            dados.get("licenca")
        );
        let p_licenca = Paragraph::parse(&texto_licenca, s_normal)?;
        let w_licenca = p_licenca.wrap(largura_texto);
        w_licenca.draw(&mut c, margem_esq, y - w_licenca.height());
        y -= w_licenca.height() + 25.0;

        c.text(CoreFont::Helvetica, 11.0, margem_esq, y, "Como citar:");
        y -= 15.0;
        let s_citacao = ParagraphStyle::new(CoreFont::Helvetica, 11.0, 13.0, Align::Justify);
        let p_citacao = Paragraph::parse(&texto_citacao(dados, true, None, None), s_citacao)?;
        let w_citacao = p_citacao.wrap(largura_texto - 10.0);
        w_citacao.draw(&mut c, margem_esq, y - w_citacao.height());

        let largura_quadro = largura_texto * 0.80;
        let x_quadro = margem_esq + (largura_texto - largura_quadro) / 2.0;
        let y_quadro_base = cm(4.0);

        let orientador = dados.get("orientador").trim();
        let coorientador = dados.get("coorientador").trim();
        let texto_orientador = if dados.get("orientador_tipo").contains("Profa") {
            format!("orientadora {orientador}")
        } else {
            format!("orientador {orientador}")
        };
        let texto_coorientador = if dados.get("coorientador_tipo").contains("Profa") {
            format!("coorientadora {coorientador}")
        } else {
            format!("coorientador {coorientador}")
        };
        let programa = programa_pos(dados.get("nivel"), dados.get("area"));
        let romanos = indice_romano(orientador, coorientador);

        let base_chaves = match Idioma::from_fields(dados) {
            Idioma::Portugues => "chave",
            Idioma::Ingles => "keyword",
        };
        let chaves_formatadas = filtrar_chaves(dados, base_chaves)
            .iter()
            .enumerate()
            .map(|(i, chave)| format!("{}. {}.", i + 1, chave))
            .collect::<Vec<_>>()
            .join(" ");

        let mut partes = vec![
            format!(
                "{}, {}<br/><br/>",
                dados.get("sobrenome"),
                dados.get("nome_completo")
            ),
            format!(
                "{} / {} {}",
                titulo_completo(dados),
                dados.get("nome_completo"),
                dados.get("sobrenome")
            ),
        ];
        if !orientador.is_empty() {
            partes.push(format!(". {texto_orientador}"));
        }
        if !coorientador.is_empty() {
            partes.push(format!(". {texto_coorientador}"));
        }
        partes.push(format!(". São Paulo, {}.<br/><br/>", dados.get("ano")));

        let texto_ficha = format!(
            "{}{} p.<br/><br/>{} - {} -- Instituto de Pesquisas Energéticas e Nucleares. \
             Universidade de São Paulo.<br/><br/>&nbsp;&nbsp;&nbsp;{}{}",
            partes.concat(),
            dados.get("paginas"),
            dados.get("nivel"),
            programa,
            chaves_formatadas,
            romanos
        );

        let s_ficha = ParagraphStyle::new(CoreFont::Courier, 9.0, 11.0, Align::Left);
        let p_ficha = Paragraph::parse(&texto_ficha, s_ficha)?;
        let w_ficha = p_ficha.wrap(largura_quadro - 20.0);
        let altura_quadro = (w_ficha.height() + 20.0).max(cm(6.5));
        c.rect_stroked(x_quadro, y_quadro_base, largura_quadro, altura_quadro);
        w_ficha.draw(
            &mut c,
            x_quadro + 10.0,
            y_quadro_base + altura_quadro - 10.0 - w_ficha.height(),
        );

        c.text_centered(
            CoreFont::Helvetica,
            10.0,
            width / 2.0,
            y_quadro_base + altura_quadro + 30.0,
            "Ficha catalográfica elaborada pelo Sistema de geração automática da Biblioteca IPEN,",
        );
        c.text_centered(
            CoreFont::Helvetica,
            10.0,
            width / 2.0,
            y_quadro_base + altura_quadro + 18.0,
            "com os dados fornecidos pelo(a) autor(a).",
        );
        c.finish()
    }
}
