//! Title page: the cover's text flow without banners or logo, plus the
//! version notice, in regular face for the body blocks.

use crate::pdf::{
    cm, Align, Canvas, CoreFont, Paragraph, ParagraphStyle, PdfError, A4_HEIGHT, A4_WIDTH,
};

use super::common::{descricao_grau, linha_subordinacao, rotulo_orientador, titulo_completo};
use super::models::FieldSet;
use super::traits::Gerador;

pub struct PaginaRostoGenerator;

impl Gerador for PaginaRostoGenerator {
    fn gerar(&self, dados: &FieldSet) -> Result<Vec<u8>, PdfError> {
        let mut c = Canvas::new();
        let (width, height) = (A4_WIDTH, A4_HEIGHT);
        let nivel = dados.get("nivel");

        c.set_fill_rgb(0.0, 0.0, 0.0);
        let s_centro = ParagraphStyle::new(CoreFont::HelveticaBold, 12.0, 14.0, Align::Center);
        let s_titulo = ParagraphStyle::new(CoreFont::HelveticaBold, 12.0, 14.0, Align::Center);
        let s_versao = ParagraphStyle::new(CoreFont::HelveticaBold, 11.0, 13.0, Align::Center);
        let s_just = ParagraphStyle::new(CoreFont::Helvetica, 12.0, 14.0, Align::Justify);
        let s_orient = ParagraphStyle::new(CoreFont::Helvetica, 12.0, 14.0, Align::Left);

        let mut y = height - cm(2.5);
        c.text_centered(
            CoreFont::HelveticaBold,
            12.0,
            width / 2.0,
            y,
            "INSTITUTO DE PESQUISAS ENERGÉTICAS E NUCLEARES",
        );
        y -= cm(0.5);
        c.text_centered(
            CoreFont::HelveticaBold,
            12.0,
            width / 2.0,
            y,
            linha_subordinacao(nivel),
        );
        y -= cm(3.0);

        let p_titulo = Paragraph::parse(&titulo_completo(dados), s_titulo)?;
        let w_titulo = p_titulo.wrap(width - cm(4.0));
        w_titulo.draw(&mut c, cm(2.0), y - w_titulo.height());
        y -= w_titulo.height() + cm(0.8);

        let versao_texto = if dados.get("versao") == "Versão Corrigida" {
            "Versão Corrigida<br/>Versão Original Disponível no IPEN"
        } else {
            "Versão Original"
        };
        let p_versao = Paragraph::parse(versao_texto, s_versao)?;
        let w_versao = p_versao.wrap(width - cm(4.0));
        w_versao.draw(&mut c, cm(2.0), y - w_versao.height());
        y -= w_versao.height() + cm(2.0);

        let autor = format!("{} {}", dados.get("nome_completo"), dados.get("sobrenome"))
            .to_uppercase();
        let p_autor = Paragraph::parse(&autor, s_centro)?;
        let w_autor = p_autor.wrap(width - cm(4.0));
        w_autor.draw(&mut c, cm(2.0), y - w_autor.height());
        y -= w_autor.height() + cm(4.5);

        let p_final = Paragraph::parse(&descricao_grau(nivel, dados.get("area")), s_just)?;
        let w_final = p_final.wrap(width / 2.0 - cm(2.0));
        w_final.draw(&mut c, width / 2.0, y - w_final.height());
        y -= w_final.height() + cm(0.8);

        if !dados.is_blank("orientador") {
            let tipo = dados.get("orientador_tipo");
            let p_label = Paragraph::parse(rotulo_orientador(tipo, false), s_orient)?;
            let w_label = p_label.wrap(width / 2.0 - cm(2.0));
            w_label.draw(&mut c, width / 2.0, y - w_label.height());
            y -= w_label.height() + cm(0.1);
            let p_nome =
                Paragraph::parse(&format!("{tipo} {}", dados.get("orientador")), s_orient)?;
            let w_nome = p_nome.wrap(width / 2.0 - cm(2.0));
            w_nome.draw(&mut c, width / 2.0, y - w_nome.height());
            y -= w_nome.height() + cm(0.8);
        }
        if !dados.is_blank("coorientador") {
            let tipo = dados.get("coorientador_tipo");
            let p_label = Paragraph::parse(rotulo_orientador(tipo, true), s_orient)?;
            let w_label = p_label.wrap(width / 2.0 - cm(2.0));
            w_label.draw(&mut c, width / 2.0, y - w_label.height());
            y -= w_label.height() + cm(0.1);
            let p_nome =
                Paragraph::parse(&format!("{tipo} {}", dados.get("coorientador")), s_orient)?;
            let w_nome = p_nome.wrap(width / 2.0 - cm(2.0));
            w_nome.draw(&mut c, width / 2.0, y - w_nome.height());
        }

        c.text_centered(CoreFont::Helvetica, 12.0, width / 2.0, cm(5.5), "São Paulo");
        c.text_centered(
            CoreFont::Helvetica,
            12.0,
            width / 2.0,
            cm(5.0),
            dados.get("ano"),
        );
        c.finish()
    }
}
