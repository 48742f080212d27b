//! Cover page: colored banner bands, institutional logo and the title /
//! author / degree block.

use std::fs;
use std::path::{Path, PathBuf};

use crate::pdf::{
    cm, mm, Align, Canvas, CoreFont, JpegImage, Paragraph, ParagraphStyle, PdfError, A4_HEIGHT,
    A4_WIDTH,
};

use super::citation::cor_faixas;
use super::common::{descricao_grau, linha_subordinacao, rotulo_orientador, titulo_completo};
use super::models::FieldSet;
use super::traits::Gerador;

const ARQUIVO_LOGO: &str = "ipen_logo_azul.jpg";

pub struct CapaGenerator {
    static_dir: PathBuf,
}

impl CapaGenerator {
    pub fn new(static_dir: &Path) -> Self {
        Self {
            static_dir: static_dir.to_path_buf(),
        }
    }

    fn carregar_logo(&self) -> Result<JpegImage, PdfError> {
        let caminho = self.static_dir.join(ARQUIVO_LOGO);
        let dados = fs::read(&caminho)
            .map_err(|e| PdfError::Image(format!("{}: {e}", caminho.display())))?;
        JpegImage::load(dados)
    }
}

impl Gerador for CapaGenerator {
    fn gerar(&self, dados: &FieldSet) -> Result<Vec<u8>, PdfError> {
        let mut c = Canvas::new();
        let (width, height) = (A4_WIDTH, A4_HEIGHT);
        let nivel = dados.get("nivel");

        let cor = cor_faixas(nivel);
        c.set_fill_rgb(cor[0], cor[1], cor[2]);
        let top_margin = mm(16.0);
        let f_fina = mm(2.7);
        let f_grossa = mm(4.8);
        let esp = mm(1.2);
        let f_comp = mm(78.0);
        let y1 = height - top_margin - f_fina;
        let y2 = y1 - esp - f_grossa;
        let y3 = y2 - esp - f_fina;
        for y_pos in [y1, y3] {
            c.rect_filled(0.0, y_pos, f_comp, f_fina);
            c.rect_filled(width - f_comp, y_pos, f_comp, f_fina);
        }
        c.rect_filled(0.0, y2, f_comp, f_grossa);
        c.rect_filled(width - f_comp, y2, f_comp, f_grossa);
        let b_margin = mm(9.0);
        c.rect_filled(0.0, b_margin, width, f_fina);
        c.rect_filled(0.0, b_margin + f_fina + esp, width, f_grossa);
        c.rect_filled(0.0, b_margin + f_fina + esp + f_grossa + esp, width, f_fina);

        match self.carregar_logo() {
            Ok(logo) => {
                let l_larg = mm(54.0);
                let l_alt = logo.height() as f32 * (l_larg / logo.width() as f32);
                let y_logo = y3 + (f_grossa + 2.0 * f_fina + 2.0 * esp - l_alt) / 2.0;
                c.draw_image(&logo, (width - l_larg) / 2.0, y_logo, l_larg, l_alt);
            }
            Err(e) => log::warn!("logotipo indisponível, capa segue sem a imagem: {e}"),
        }

        c.set_fill_rgb(0.0, 0.0, 0.0);
        let s_titulo = ParagraphStyle::new(CoreFont::HelveticaBold, 12.0, 14.0, Align::Center);
        let s_autor = ParagraphStyle::new(CoreFont::HelveticaBold, 12.0, 14.0, Align::Center);
        let s_just = ParagraphStyle::new(CoreFont::HelveticaBold, 12.0, 14.0, Align::Justify);
        let s_orient = ParagraphStyle::new(CoreFont::HelveticaBold, 12.0, 14.0, Align::Left);

        let mut y = y3 - mm(20.0);
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
        y -= cm(2.5);

        let p_titulo = Paragraph::parse(&titulo_completo(dados), s_titulo)?;
        let w_titulo = p_titulo.wrap(width - cm(4.0));
        w_titulo.draw(&mut c, cm(2.0), y - w_titulo.height());
        y -= w_titulo.height() + cm(2.0);

        let autor = format!("{} {}", dados.get("nome_completo"), dados.get("sobrenome"))
            .to_uppercase();
        let p_autor = Paragraph::parse(&autor, s_autor)?;
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

        c.text_centered(CoreFont::HelveticaBold, 12.0, width / 2.0, cm(5.5), "São Paulo");
        c.text_centered(
            CoreFont::HelveticaBold,
            12.0,
            width / 2.0,
            cm(5.0),
            dados.get("ano"),
        );
        c.finish()
    }
}
