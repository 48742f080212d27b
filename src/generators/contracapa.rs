//! Back cover: full-width banner bands and the institutional address block.

use crate::pdf::{
    cm, mm, Align, Canvas, CoreFont, Paragraph, ParagraphStyle, PdfError, A4_HEIGHT, A4_WIDTH,
};

use super::citation::cor_faixas;
use super::models::FieldSet;
use super::traits::Gerador;

const TEXTO_INSTITUCIONAL: &str = "INSTITUTO DE PESQUISAS ENERGÉTICAS E NUCLEARES<br/>\
Av. Prof. Lineu Prestes, 2242 - Cidade Universitária - CEP: 05508-000<br/>\
Fone: (11) 2810-5000<br/>\
São Paulo - SP - Brasil<br/>\
https://www.gov.br/ipen<br/><br/>\
O IPEN é uma Autarquia vinculada à Secretaria de Desenvolvimento, associada<br/>\
à Universidade de São Paulo e gerida técnica e administrativamente pela<br/>\
Comissão Nacional de Energia Nuclear, órgão do<br/>\
Ministério da Ciência, Tecnologia e Inovação.";

pub struct ContracapaGenerator;

impl Gerador for ContracapaGenerator {
    fn gerar(&self, dados: &FieldSet) -> Result<Vec<u8>, PdfError> {
        let mut c = Canvas::new();
        let (width, height) = (A4_WIDTH, A4_HEIGHT);

        let cor = cor_faixas(dados.get("nivel"));
        c.set_fill_rgb(cor[0], cor[1], cor[2]);
        let f_fina = mm(2.7);
        let f_grossa = mm(4.8);
        let esp = mm(1.2);
        c.rect_filled(0.0, height - mm(16.0) - f_fina, width, f_fina);
        c.rect_filled(0.0, height - mm(16.0) - f_fina - esp - f_grossa, width, f_grossa);
        c.rect_filled(
            0.0,
            height - mm(16.0) - f_fina - esp - f_grossa - esp - f_fina,
            width,
            f_fina,
        );
        let b_margin = mm(9.0);
        c.rect_filled(0.0, b_margin, width, f_fina);
        c.rect_filled(0.0, b_margin + f_fina + esp, width, f_grossa);
        c.rect_filled(0.0, b_margin + f_fina + esp + f_grossa + esp, width, f_fina);

        c.set_fill_rgb(0.0, 0.0, 0.0);
        let estilo = ParagraphStyle::new(CoreFont::HelveticaBold, 10.0, 12.0, Align::Center);
        let p = Paragraph::parse(TEXTO_INSTITUCIONAL, estilo)?;
        let wrapped = p.wrap(width - cm(4.0));
        wrapped.draw(&mut c, cm(2.0), b_margin + cm(4.0));
        c.finish()
    }
}
