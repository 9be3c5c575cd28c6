use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ptrib_cli::menu::{MenuChoice, menu_table, parse_choice};
use ptrib_cli::pipeline::{self, banner_headers};
use ptrib_cli::summary::{file_list_table, statistics_table};
use ptrib_ingest::list_spreadsheets;
use ptrib_model::Settings;
use ptrib_report::{render_all_clear, render_sections};
use ptrib_validate::to_response;

use crate::cli::ValidateArgs;

/// Validate one file. Returns whether any violation was found.
pub fn run_validate(args: &ValidateArgs, settings: &Settings) -> Result<bool> {
    validate_file(&args.file, settings, args.json, !args.no_log)
}

pub fn run_files(settings: &Settings) -> Result<()> {
    let files = list_spreadsheets(&settings.input_dir)
        .with_context(|| format!("list {}", settings.input_dir.display()))?;
    if files.is_empty() {
        println!(
            "Nenhuma planilha encontrada em {}",
            settings.input_dir.display()
        );
        return Ok(());
    }
    println!("{}", file_list_table(&files));
    Ok(())
}

/// Numbered file picker: choose a file to validate, refresh the listing or
/// quit. Validation failures are reported and the menu comes back.
pub fn run_menu(settings: &Settings) -> Result<()> {
    let mut files = list_spreadsheets(&settings.input_dir)
        .with_context(|| format!("list {}", settings.input_dir.display()))?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!(
            "Quantidade de arquivos disponíveis para processamento: {}",
            files.len()
        );
        if files.is_empty() {
            println!("Nenhum arquivo disponível. Atualize a lista de arquivos.");
        }
        println!("{}", menu_table(&files));

        let choice = loop {
            print!("Escolha a opção desejada: ");
            io::stdout().flush().context("flush stdout")?;
            let mut line = String::new();
            if input.read_line(&mut line).context("read option")? == 0 {
                // stdin closed
                break MenuChoice::Quit;
            }
            match parse_choice(&line, files.len()) {
                Some(choice) => break choice,
                None => println!("Nenhuma opção válida selecionada"),
            }
        };

        match choice {
            MenuChoice::File(index) => {
                if let Err(error) = validate_file(&files[index].path, settings, false, true) {
                    println!("\n❌ Erro: {error:#}");
                }
            }
            MenuChoice::Refresh => {
                files = list_spreadsheets(&settings.input_dir)
                    .with_context(|| format!("list {}", settings.input_dir.display()))?;
                println!("\n✓ Lista de arquivos atualizada!");
                println!(
                    "Para adicionar uma planilha, coloque-a na pasta: {}\n",
                    settings.input_dir.display()
                );
            }
            MenuChoice::Quit => {
                println!("\nEncerrando o programa. Até logo!");
                return Ok(());
            }
        }
    }
}

fn validate_file(path: &Path, settings: &Settings, json: bool, write_log: bool) -> Result<bool> {
    let span = info_span!("run", file = %path.display());
    let _guard = span.enter();

    if !json {
        println!("\n🔄 Iniciando processamento...");
    }
    let sheet = pipeline::load(path, &settings.sheet)?;

    if !json {
        println!("\n✅ Planilha carregada!");
        println!(
            "📊 Colunas: {} | Linhas: {}",
            sheet.metadata.headers.len(),
            sheet.metadata.row_count
        );
        let (shown, remaining) = banner_headers(&sheet.metadata.headers);
        println!("\n📋 Cabeçalhos encontrados:");
        for header in shown {
            println!("   - {header}");
        }
        if remaining > 0 {
            println!("   ... e mais {remaining} colunas");
        }
        println!("\n⏳ Processando validações...");
    }

    let report = pipeline::validate(&sheet);
    info!(
        total_errors = report.total_errors(),
        elapsed = %report.processing_time(),
        "validation finished"
    );

    if json {
        let body = serde_json::to_string_pretty(&to_response(&report))
            .context("serialize response")?;
        println!("{body}");
    } else if report.is_clean() {
        print!("{}", render_all_clear(&report));
        return Ok(false);
    } else {
        print!("{}", render_sections(&report));
    }

    if write_log && !report.is_clean() {
        if !json {
            println!("\n💾 Salvando log...");
        }
        match pipeline::persist(&sheet, &settings.log_dir, &report) {
            Ok(path) if !json => println!("✅ Log salvo em: {}", path.display()),
            Ok(_) => {}
            Err(error) => eprintln!("❌ Erro ao salvar log: {error:#}"),
        }
    }

    if !json {
        println!("\n{}", statistics_table(&report, sheet.cells_checked()));
    }
    Ok(!report.is_clean())
}
