//! Bibliographic citation string and the academic-level classification it
//! depends on.

use super::models::FieldSet;

/// Academic degree category. Classification is an ordered, explicit match
/// over the free-text level field; more specific terms are checked first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NivelAcademico {
    Tese,
    MestradoProfissional,
    Mestrado,
}

impl NivelAcademico {
    /// Ordered table: "Tese" first, then "Mestrado Profissional" before the
    /// plain "Mestrado"; unmatched input falls to the least-specific
    /// category.
    pub fn classificar(nivel: &str) -> Self {
        if nivel.contains("Tese") {
            NivelAcademico::Tese
        } else if nivel.contains("Mestrado Profissional") {
            NivelAcademico::MestradoProfissional
        } else {
            NivelAcademico::Mestrado
        }
    }

    pub fn tipo_trabalho(&self) -> &'static str {
        match self {
            NivelAcademico::Tese => "Tese (Doutorado em Tecnologia Nuclear)",
            NivelAcademico::MestradoProfissional => {
                "Dissertação (Mestrado Profissional em Tecnologia das Radiações em Ciências da Saúde)"
            }
            NivelAcademico::Mestrado => "Dissertação (Mestrado em Tecnologia Nuclear)",
        }
    }
}

/// Banner colors per level, most specific substring first. The fallback is
/// the thesis color, deliberately not the same default as
/// [`NivelAcademico::classificar`].
const CORES_FAIXAS: [(&str, [f32; 3]); 3] = [
    (
        "Mestrado Profissional",
        [129.0 / 255.0, 0.0 / 255.0, 64.0 / 255.0],
    ),
    ("Mestrado", [30.0 / 255.0, 143.0 / 255.0, 113.0 / 255.0]),
    ("Tese", [52.0 / 255.0, 14.0 / 255.0, 113.0 / 255.0]),
];

pub fn cor_faixas(nivel: &str) -> [f32; 3] {
    CORES_FAIXAS
        .iter()
        .find(|(chave, _)| nivel.contains(chave))
        .map(|(_, cor)| *cor)
        .unwrap_or(CORES_FAIXAS[2].1)
}

/// Build the citation string. `incluir_disponivel_em` selects the long
/// repository boilerplate (catalog card) over the short institutional one
/// (abstract pages); the title overrides feed the translated title into the
/// abstract's citation.
pub fn texto_citacao(
    dados: &FieldSet,
    incluir_disponivel_em: bool,
    titulo_override: Option<&str>,
    subtitulo_override: Option<&str>,
) -> String {
    let nome_citacao = dados.get("nome_citacao").trim();
    if nome_citacao.is_empty() {
        return String::new();
    }
    let mut autor = match nome_citacao.split_once(',') {
        Some((sobrenome, resto)) => format!("{}, {}", sobrenome.to_uppercase(), resto.trim()),
        None => nome_citacao.to_uppercase(),
    };
    if !autor.ends_with('.') {
        autor.push('.');
    }

    let titulo = titulo_override.unwrap_or(dados.get("titulo")).trim();
    let subtitulo = subtitulo_override.unwrap_or(dados.get("subtitulo")).trim();
    let titulo_formatado = if subtitulo.is_empty() {
        format!("<b>{titulo}</b>.")
    } else {
        format!("<b>{titulo}</b>: {subtitulo}.")
    };

    let tipo_trabalho = NivelAcademico::classificar(dados.get("nivel")).tipo_trabalho();
    let demais = format!(
        "{}. {} p. {}.",
        dados.get("ano"),
        dados.get("paginas"),
        tipo_trabalho
    );

    let texto_fixo = if incluir_disponivel_em {
        " Instituto de Pesquisas Energéticas e Nucleares. São Paulo. Disponível em: \
         <a href=\"http://repositorio.ipen.br/\" color=\"blue\"><u>http://repositorio.ipen.br/</u></a>. \
         Acesso em: (data de consulta no formato: dia mês_abrev. ano)."
    } else {
        " Instituto de Pesquisas Energéticas e Nucleares - IPEN-CNEN/SP. São Paulo."
    };

    format!("{autor} {titulo_formatado} {demais}{texto_fixo}")
}
