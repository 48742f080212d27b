//! Input validation for document generation.
//!
//! Validation runs over the union of the requested document types before any
//! rendering is attempted; a failure preserves the submitted values and
//! produces a single human-readable flash message.

use std::fmt;

use super::models::{DocumentKind, FieldSet, Idioma};

/// Minimum keyword slots that must be filled per required language.
pub const MINIMO_CHAVES: usize = 3;

/// Validation error with a user-facing message in Portuguese.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field (or field group) that failed.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Error for an empty required field.
    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{label} não pode ficar em branco"))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors with flash-message formatting.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// One-line message for the form's flash area.
    pub fn to_flash_message(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.clone())
            .collect::<Vec<_>>()
            .join(" · ")
    }

    pub fn into_result(self) -> Result<(), String> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.to_flash_message())
        }
    }
}

// ============================================================================
// Validation functions
// ============================================================================

/// Validate that a string is not empty after trimming.
pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

/// Required fields per document type; labels are what the user sees.
fn campos_do_tipo(kind: DocumentKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        DocumentKind::Capa | DocumentKind::PaginaRosto => &[
            ("nome_completo", "Nome"),
            ("sobrenome", "Sobrenome"),
            ("titulo", "Título"),
            ("nivel", "Nível acadêmico"),
            ("area", "Área"),
            ("ano", "Ano"),
        ],
        DocumentKind::Ficha => &[
            ("nome_completo", "Nome"),
            ("sobrenome", "Sobrenome"),
            ("nome_citacao", "Nome para citação"),
            ("titulo", "Título"),
            ("nivel", "Nível acadêmico"),
            ("area", "Área"),
            ("ano", "Ano"),
            ("paginas", "Número de páginas"),
            ("licenca", "Licença"),
            ("idioma", "Idioma principal"),
        ],
        DocumentKind::Resumo => &[
            ("nome_citacao", "Nome para citação"),
            ("titulo", "Título"),
            ("nivel", "Nível acadêmico"),
            ("ano", "Ano"),
            ("paginas", "Número de páginas"),
            ("resumo", "Resumo"),
        ],
        DocumentKind::Abstract => &[
            ("nome_citacao", "Nome para citação"),
            ("titulo_traduzido", "Título traduzido"),
            ("nivel", "Nível acadêmico"),
            ("ano", "Ano"),
            ("paginas", "Número de páginas"),
            ("abstract", "Abstract"),
        ],
        DocumentKind::Contracapa => &[("nivel", "Nível acadêmico")],
    }
}

/// Both halves of an advisor pair must come together.
fn validar_par_orientacao(
    dados: &FieldSet,
    campo_nome: &str,
    campo_tipo: &str,
    rotulo: &str,
    errors: &mut ValidationErrors,
) {
    let nome = dados.get(campo_nome).trim();
    let tipo = dados.get(campo_tipo).trim();
    if !nome.is_empty() && tipo.is_empty() {
        errors.add(ValidationError::new(
            campo_tipo,
            format!("Título acadêmico do {rotulo} é obrigatório quando o nome é informado"),
        ));
    }
    if nome.is_empty() && !tipo.is_empty() {
        errors.add(ValidationError::new(
            campo_nome,
            format!("Nome do {rotulo} é obrigatório quando o título acadêmico é informado"),
        ));
    }
}

fn contar_chaves(dados: &FieldSet, base: &str) -> usize {
    (1..=5)
        .filter(|i| !dados.is_blank(&format!("{base}{i}")))
        .count()
}

/// Validate a whole generation request. The keyword languages required are
/// exactly the bases the selected renderers will read.
pub fn validar_pedido(dados: &FieldSet, tipos: &[DocumentKind]) -> Result<(), String> {
    let mut errors = ValidationErrors::new();

    if tipos.is_empty() {
        errors.add(ValidationError::new(
            "documentos",
            "Você deve selecionar pelo menos um documento para gerar",
        ));
        return errors.into_result();
    }

    let mut vistos: Vec<&str> = Vec::new();
    for kind in tipos {
        for &(campo, rotulo) in campos_do_tipo(*kind) {
            if !vistos.contains(&campo) {
                vistos.push(campo);
                validate_required(dados.get(campo), campo, rotulo, &mut errors);
            }
        }
    }

    validar_par_orientacao(dados, "orientador", "orientador_tipo", "orientador", &mut errors);
    validar_par_orientacao(
        dados,
        "coorientador",
        "coorientador_tipo",
        "coorientador",
        &mut errors,
    );

    let idioma = Idioma::from_fields(dados);
    let precisa_portugues = tipos.contains(&DocumentKind::Resumo)
        || (tipos.contains(&DocumentKind::Ficha) && idioma == Idioma::Portugues);
    let precisa_ingles = tipos.contains(&DocumentKind::Abstract)
        || (tipos.contains(&DocumentKind::Ficha) && idioma == Idioma::Ingles);
    if precisa_portugues && contar_chaves(dados, "chave") < MINIMO_CHAVES {
        errors.add(ValidationError::new(
            "chave",
            format!("Informe ao menos {MINIMO_CHAVES} palavras-chave em português"),
        ));
    }
    if precisa_ingles && contar_chaves(dados, "keyword") < MINIMO_CHAVES {
        errors.add(ValidationError::new(
            "keyword",
            format!("Informe ao menos {MINIMO_CHAVES} keywords em inglês"),
        ));
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dados_completos() -> FieldSet {
        let mut dados = FieldSet::new();
        dados.set("nome_completo", "Ana");
        dados.set("sobrenome", "Silva");
        dados.set("nome_citacao", "Silva, Ana");
        dados.set("titulo", "Estudo X");
        dados.set("nivel", "Mestrado");
        dados.set("area", "Reatores");
        dados.set("ano", "2024");
        dados.set("paginas", "120");
        dados.set("licenca", "CC BY 4.0");
        dados.set("idioma", "Português");
        dados.set("resumo", "corpo do resumo");
        dados.set("abstract", "abstract body");
        dados.set("titulo_traduzido", "Study X");
        for i in 1..=3 {
            dados.set(format!("chave{i}"), format!("termo{i}"));
            dados.set(format!("keyword{i}"), format!("term{i}"));
        }
        dados
    }

    #[test]
    fn pedido_vazio_falha() {
        let resultado = validar_pedido(&dados_completos(), &[]);
        assert!(resultado.is_err());
        assert!(resultado.unwrap_err().contains("pelo menos um documento"));
    }

    #[test]
    fn pedido_completo_passa() {
        let tipos = DocumentKind::ALL;
        assert!(validar_pedido(&dados_completos(), &tipos).is_ok());
    }

    #[test]
    fn campo_obrigatorio_ausente_falha() {
        let mut dados = dados_completos();
        dados.set("titulo", "  ");
        let erro = validar_pedido(&dados, &[DocumentKind::Capa]).unwrap_err();
        assert!(erro.contains("Título não pode ficar em branco"));
    }

    #[test]
    fn orientador_sem_titulo_academico_falha() {
        let mut dados = dados_completos();
        dados.set("orientador", "Carlos Souza");
        let erro = validar_pedido(&dados, &[DocumentKind::Capa]).unwrap_err();
        assert!(erro.contains("Título acadêmico do orientador"));
        dados.set("orientador_tipo", "Prof. Dr.");
        assert!(validar_pedido(&dados, &[DocumentKind::Capa]).is_ok());
    }

    #[test]
    fn tipo_sem_nome_de_orientador_falha() {
        let mut dados = dados_completos();
        dados.set("coorientador_tipo", "Profa. Dra.");
        let erro = validar_pedido(&dados, &[DocumentKind::Contracapa]).unwrap_err();
        assert!(erro.contains("Nome do coorientador"));
    }

    #[test]
    fn resumo_exige_tres_chaves_em_portugues() {
        let mut dados = dados_completos();
        dados.set("chave3", "");
        let erro = validar_pedido(&dados, &[DocumentKind::Resumo]).unwrap_err();
        assert!(erro.contains("3 palavras-chave em português"));
    }

    #[test]
    fn abstract_exige_tres_keywords() {
        let mut dados = dados_completos();
        dados.set("keyword2", " ");
        let erro = validar_pedido(&dados, &[DocumentKind::Abstract]).unwrap_err();
        assert!(erro.contains("keywords em inglês"));
    }

    #[test]
    fn ficha_exige_chaves_do_idioma_declarado() {
        let mut dados = dados_completos();
        dados.set("idioma", "Inglês");
        dados.set("keyword1", "");
        let erro = validar_pedido(&dados, &[DocumentKind::Ficha]).unwrap_err();
        assert!(erro.contains("keywords em inglês"));
        // Portuguese keywords are not demanded by an English-language card.
        dados.set("chave1", "");
        dados.set("chave2", "");
        dados.set("keyword1", "term1");
        assert!(validar_pedido(&dados, &[DocumentKind::Ficha]).is_ok());
    }

    #[test]
    fn mensagens_se_acumulam() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::empty_field("titulo", "Título"));
        errors.add(ValidationError::empty_field("ano", "Ano"));
        assert_eq!(errors.len(), 2);
        let msg = errors.to_flash_message();
        assert!(msg.contains("Título não pode ficar em branco"));
        assert!(msg.contains("Ano não pode ficar em branco"));
    }
}
