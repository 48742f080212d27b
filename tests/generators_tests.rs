mod common;

use std::path::Path;

use common::{contagem_paginas, dados_validos, mostra_texto};
use ipen_docs_server::generators::capa::CapaGenerator;
use ipen_docs_server::generators::contracapa::ContracapaGenerator;
use ipen_docs_server::generators::ficha::FichaGenerator;
use ipen_docs_server::generators::pagina_rosto::PaginaRostoGenerator;
use ipen_docs_server::generators::resumo::{AbstractGenerator, ResumoGenerator};
use ipen_docs_server::generators::{Gerador, Idioma};

// Capa / Contracapa

#[test]
fn capa_renderiza_sem_logotipo_disponivel() {
    // A directory with no logo asset exercises the recovery path.
    let gerador = CapaGenerator::new(Path::new("/nonexistent"));
    let pdf = gerador.gerar(&dados_validos()).expect("capa sem logo");
    assert_eq!(contagem_paginas(&pdf), 1);
    assert!(mostra_texto(&pdf, "INSTITUTO"));
    assert!(mostra_texto(&pdf, "São"));
}

#[test]
fn capa_mostra_autor_em_caixa_alta() {
    let gerador = CapaGenerator::new(Path::new("/nonexistent"));
    let pdf = gerador.gerar(&dados_validos()).expect("capa");
    assert!(mostra_texto(&pdf, "ANA"));
    assert!(mostra_texto(&pdf, "SILVA"));
}

#[test]
fn capa_mostra_rotulo_do_orientador() {
    let gerador = CapaGenerator::new(Path::new("/nonexistent"));
    let mut dados = dados_validos();
    let pdf = gerador.gerar(&dados).expect("capa");
    assert!(mostra_texto(&pdf, "Orientador:"));

    dados.set("orientador_tipo", "Profa. Dra.");
    let pdf = gerador.gerar(&dados).expect("capa");
    assert!(mostra_texto(&pdf, "Orientadora:"));
}

#[test]
fn contracapa_renderiza_bloco_institucional() {
    let pdf = ContracapaGenerator.gerar(&dados_validos()).expect("contracapa");
    assert_eq!(contagem_paginas(&pdf), 1);
    assert!(mostra_texto(&pdf, "Autarquia"));
}

// Página de rosto

#[test]
fn pagina_rosto_versao_original() {
    let pdf = PaginaRostoGenerator.gerar(&dados_validos()).expect("rosto");
    assert!(mostra_texto(&pdf, "Versão"));
    assert!(mostra_texto(&pdf, "Original"));
    assert!(!mostra_texto(&pdf, "Corrigida"));
}

#[test]
fn pagina_rosto_versao_corrigida_tem_duas_linhas() {
    let mut dados = dados_validos();
    dados.set("versao", "Versão Corrigida");
    let pdf = PaginaRostoGenerator.gerar(&dados).expect("rosto");
    assert!(mostra_texto(&pdf, "Corrigida"));
    assert!(mostra_texto(&pdf, "Disponível"));
}

// Ficha catalográfica

#[test]
fn ficha_renderiza_com_citacao_e_licenca() {
    let pdf = FichaGenerator.gerar(&dados_validos()).expect("ficha");
    assert_eq!(contagem_paginas(&pdf), 1);
    assert!(mostra_texto(&pdf, "Como"));
    assert!(mostra_texto(&pdf, "citar:"));
    assert!(mostra_texto(&pdf, "SILVA,"));
    assert!(mostra_texto(&pdf, "orient."));
}

#[test]
fn ficha_tolera_citacao_vazia() {
    let mut dados = dados_validos();
    dados.set("nome_citacao", "");
    let pdf = FichaGenerator.gerar(&dados).expect("ficha sem citação");
    assert_eq!(contagem_paginas(&pdf), 1);
}

#[test]
fn ficha_usa_chaves_do_idioma_declarado() {
    let mut dados = dados_validos();
    let pdf = FichaGenerator.gerar(&dados).expect("ficha");
    assert!(mostra_texto(&pdf, "blindagem."));

    dados.set("idioma", "Inglês");
    let pdf = FichaGenerator.gerar(&dados).expect("ficha");
    assert!(mostra_texto(&pdf, "shielding."));
    assert!(!mostra_texto(&pdf, "blindagem."));
}

// Resumo / Abstract

#[test]
fn resumo_em_portugues_tem_cabecalho_resumo() {
    let gerador = ResumoGenerator {
        idioma_principal: Idioma::Portugues,
    };
    let pdf = gerador.gerar(&dados_validos()).expect("resumo");
    assert!(mostra_texto(&pdf, "RESUMO"));
    assert!(mostra_texto(&pdf, "Palavras-chave:"));
}

#[test]
fn abstract_em_portugues_tem_cabecalho_abstract() {
    let gerador = AbstractGenerator {
        idioma_principal: Idioma::Portugues,
    };
    let pdf = gerador.gerar(&dados_validos()).expect("abstract");
    assert!(mostra_texto(&pdf, "ABSTRACT"));
    assert!(mostra_texto(&pdf, "Keywords:"));
}

#[test]
fn abstract_usa_titulo_traduzido_na_citacao() {
    let gerador = AbstractGenerator {
        idioma_principal: Idioma::Portugues,
    };
    let pdf = gerador.gerar(&dados_validos()).expect("abstract");
    assert!(mostra_texto(&pdf, "Neutron"));
}

#[test]
fn corpo_longo_pagina_em_mais_de_uma_pagina() {
    let mut dados = dados_validos();
    let frase = "Parágrafo de enchimento com conteúdo suficiente para ocupar espaço. ";
    dados.set("resumo", frase.repeat(80));
    let gerador = ResumoGenerator {
        idioma_principal: Idioma::Portugues,
    };
    let pdf = gerador.gerar(&dados).expect("resumo longo");
    assert!(contagem_paginas(&pdf) > 1);
}

#[test]
fn resumo_omite_linha_de_chaves_sem_nenhuma_preenchida() {
    let mut dados = dados_validos();
    for i in 1..=5 {
        dados.set(format!("chave{i}"), "");
    }
    let gerador = ResumoGenerator {
        idioma_principal: Idioma::Portugues,
    };
    let pdf = gerador.gerar(&dados).expect("resumo");
    assert!(!mostra_texto(&pdf, "Palavras-chave:"));
}
