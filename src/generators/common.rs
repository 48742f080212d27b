//! Shared text helpers used by more than one renderer.

use super::citation::NivelAcademico;
use super::models::FieldSet;

/// Second header line: the professional master's program names itself, the
/// others show the university affiliation.
pub fn linha_subordinacao(nivel: &str) -> &'static str {
    match NivelAcademico::classificar(nivel) {
        NivelAcademico::MestradoProfissional => {
            "Mestrado Profissional em Tecnologia das Radiações em Ciências da Saúde"
        }
        _ => "Autarquia associada à Universidade de São Paulo",
    }
}

/// The degree-requirement sentence on cover and title page.
pub fn descricao_grau(nivel: &str, area: &str) -> String {
    match NivelAcademico::classificar(nivel) {
        NivelAcademico::MestradoProfissional => format!(
            "Dissertação apresentada como parte dos requisitos para obtenção do Grau de \
             Mestre Profissional em Tecnologia das Radiações em Ciências da Saúde na Área de {area}"
        ),
        NivelAcademico::Mestrado => format!(
            "Dissertação apresentada como parte dos requisitos para obtenção do Grau de \
             Mestre em Ciências na Área de Tecnologia Nuclear - {area}"
        ),
        NivelAcademico::Tese => format!(
            "Tese apresentada como parte dos requisitos para obtenção do Grau de \
             Doutor em Ciências na Área de Tecnologia Nuclear - {area}"
        ),
    }
}

/// Graduate program description used on the catalog card.
pub fn programa_pos(nivel: &str, area: &str) -> String {
    match NivelAcademico::classificar(nivel) {
        NivelAcademico::MestradoProfissional => format!(
            "Programa de Pós-Graduação em Tecnologia das Radiações em Ciências da Saúde ({area})"
        ),
        _ => format!("Programa de Pós-Graduação em Tecnologia Nuclear ({area})"),
    }
}

/// Advisor labels are gendered by the academic title field.
pub fn rotulo_orientador(tipo: &str, coorientador: bool) -> &'static str {
    match (coorientador, tipo.contains("Profa")) {
        (false, true) => "Orientadora:",
        (false, false) => "Orientador:",
        (true, true) => "Coorientadora:",
        (true, false) => "Coorientador:",
    }
}

/// Title+subtitle joined the way every page prints them.
pub fn titulo_completo(dados: &FieldSet) -> String {
    let titulo = dados.get("titulo").trim();
    let subtitulo = dados.get("subtitulo").trim();
    if subtitulo.is_empty() {
        titulo.to_string()
    } else {
        format!("{titulo}: {subtitulo}")
    }
}

/// Roman-numeral index line of the catalog card; three mutually exclusive
/// templates depending on which advisors are present.
pub fn indice_romano(orientador: &str, coorientador: &str) -> String {
    if !orientador.is_empty() && !coorientador.is_empty() {
        format!("I. {orientador}, orient. II. {coorientador}, coorient. III. Título.")
    } else if !orientador.is_empty() {
        format!("I. {orientador}, orient. II. Título.")
    } else {
        "I. Título.".to_string()
    }
}

/// The filled keyword slots (`{base}1` .. `{base}5`), in slot order.
pub fn filtrar_chaves(dados: &FieldSet, base: &str) -> Vec<String> {
    (1..=5)
        .map(|i| dados.get(&format!("{base}{i}")).trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotulo_segue_titulo_academico() {
        assert_eq!(rotulo_orientador("Profa. Dra.", false), "Orientadora:");
        assert_eq!(rotulo_orientador("Prof. Dr.", false), "Orientador:");
        assert_eq!(rotulo_orientador("Profa. Dra.", true), "Coorientadora:");
    }

    #[test]
    fn chaves_ignoram_lacunas() {
        let mut dados = FieldSet::new();
        dados.set("chave1", "reator");
        dados.set("chave3", "dosimetria");
        dados.set("chave5", " ");
        assert_eq!(filtrar_chaves(&dados, "chave"), vec!["reator", "dosimetria"]);
    }

    #[test]
    fn indice_romano_com_ambos() {
        assert_eq!(
            indice_romano("Carlos Souza", "Maria Lima"),
            "I. Carlos Souza, orient. II. Maria Lima, coorient. III. Título."
        );
    }

    #[test]
    fn indice_romano_somente_orientador() {
        assert_eq!(
            indice_romano("Carlos Souza", ""),
            "I. Carlos Souza, orient. II. Título."
        );
    }

    #[test]
    fn indice_romano_sem_orientacao() {
        assert_eq!(indice_romano("", ""), "I. Título.");
    }

    #[test]
    fn descricao_grau_por_nivel() {
        assert!(descricao_grau("Tese (Doutorado)", "Reatores").contains("Grau de Doutor"));
        assert!(descricao_grau("Mestrado", "Reatores").contains("Mestre em Ciências"));
        assert!(
            descricao_grau("Mestrado Profissional", "Física Médica")
                .contains("Mestre Profissional")
        );
    }
}
