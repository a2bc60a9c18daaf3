//! Interactive explorer session.
//!
//! Reads one command per line from stdin and drives a [`ListController`]
//! and a [`DetailController`], re-rendering the list after each change.

use std::io::Write;

use owo_colors::OwoColorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::controller::{DetailController, ListController, ListStatus};
use crate::display::{
    format_active_filters, format_catalog, format_detail, format_item_table,
    format_page_controls, format_status,
};
use crate::error::Result;
use crate::notice::Notice;
use crate::query::SortColumn;
use crate::remote::ItemSource;
use crate::types::{Facet, PageSize, RangeBound, RangeField};

use super::{App, format_range_summary};

const HELP: &str = "\
Commands:
  toggle <facet> <key>          toggle a facet value (type, level, area, target, nuta, source)
  area <key>                    select a content area
  range <meanp|metric> <min|max> [value]
                                set a range bound; no value clears it
  search [text]                 search label and names; no text clears it
  sort <column>                 sort by column, again to flip direction
  page <n> | next | prev        navigate pages
  size <10|25|50|100>           rows per page
  open <id>                     show item detail
  filters                       list facet values
  clear                         reset all filters
  show                          redraw the list
  help                          this text
  quit                          leave";

#[derive(Debug, Clone, PartialEq)]
pub enum ExploreCommand {
    Toggle(Facet, String),
    Area(String),
    Range(RangeField, RangeBound, String),
    Search(String),
    Sort(SortColumn),
    Page(u32),
    Next,
    Prev,
    Size(PageSize),
    Open(i64),
    Filters,
    Clear,
    Show,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> std::result::Result<Option<ExploreCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();
    let rest = args.join(" ");

    let command = match verb.to_lowercase().as_str() {
        "toggle" | "t" => {
            let [facet, key @ ..] = args.as_slice() else {
                return Err("usage: toggle <facet> <key>".to_string());
            };
            if key.is_empty() {
                return Err("usage: toggle <facet> <key>".to_string());
            }
            let facet = facet.parse::<Facet>().map_err(|e| format!("{e}"))?;
            ExploreCommand::Toggle(facet, key.join(" "))
        }
        "area" => {
            if rest.is_empty() {
                return Err("usage: area <key>".to_string());
            }
            ExploreCommand::Area(rest)
        }
        "range" => {
            let [field, bound, value @ ..] = args.as_slice() else {
                return Err("usage: range <meanp|metric> <min|max> [value]".to_string());
            };
            let field = field.parse::<RangeField>().map_err(|e| format!("{e}"))?;
            let bound = bound.parse::<RangeBound>().map_err(|e| format!("{e}"))?;
            ExploreCommand::Range(field, bound, value.join(" "))
        }
        "search" | "/" => ExploreCommand::Search(rest),
        "sort" => {
            let column = rest.parse::<SortColumn>().map_err(|_| {
                format!(
                    "invalid sort column '{rest}'. Must be one of: {}",
                    SortColumn::ALL_STRINGS.join(", ")
                )
            })?;
            ExploreCommand::Sort(column)
        }
        "page" | "p" => {
            let page = rest
                .parse::<u32>()
                .map_err(|_| format!("invalid page number '{rest}'"))?;
            ExploreCommand::Page(page)
        }
        "next" | "n" => ExploreCommand::Next,
        "prev" | "previous" => ExploreCommand::Prev,
        "size" => ExploreCommand::Size(rest.parse::<PageSize>().map_err(|e| format!("{e}"))?),
        "open" | "o" => {
            let id = rest
                .parse::<i64>()
                .map_err(|_| format!("invalid item id '{rest}'"))?;
            ExploreCommand::Open(id)
        }
        "filters" | "f" => ExploreCommand::Filters,
        "clear" => ExploreCommand::Clear,
        "show" | "ls" => ExploreCommand::Show,
        "help" | "?" => ExploreCommand::Help,
        "quit" | "exit" | "q" => ExploreCommand::Quit,
        other => return Err(format!("unknown command '{other}', try 'help'")),
    };
    Ok(Some(command))
}

fn render<S: ItemSource + 'static>(controller: &ListController<S>) {
    let view = controller.snapshot();

    let summary = format_active_filters(&view.filters, &view.query, controller.second_metric());
    println!(
        "{} {}",
        format_status(view.status),
        if summary.is_empty() {
            "no filters".dimmed().to_string()
        } else {
            summary
        }
    );

    if !view.rows.is_empty() {
        println!("{}", format_item_table(&view.rows));
    }
    if view.status != ListStatus::Error {
        println!(
            "{}  sorted by {} {}",
            format_range_summary(
                view.query.page,
                view.query.page_size.get(),
                view.rows.len(),
                view.total
            ),
            view.query.sort_by,
            view.query.sort_dir
        );
        println!("{}", format_page_controls(&view.controls));
    }
    if let Some(notice) = &view.notice {
        println!("{notice}");
    }
}

fn prompt() -> Result<()> {
    print!("{} ", "itembank>".bold());
    std::io::stdout().flush()?;
    Ok(())
}

/// Run the interactive session until `quit` or end of input.
pub async fn cmd_explore(app: &App) -> Result<()> {
    let controller = ListController::new(
        app.source.clone(),
        app.config.filter_store(),
        app.config.list_options(),
    );
    let details = DetailController::new(app.source.clone());

    if let Err(e) = controller.load_catalog().await {
        eprintln!("{}", Notice::warning("Could not load filter values").with_detail(&e));
    }
    controller.reload().await;
    render(&controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{}", message.red());
                continue;
            }
        };

        match command {
            ExploreCommand::Toggle(facet, key) => controller.toggle_facet(facet, &key).await,
            ExploreCommand::Area(key) => controller.select_content_area(&key).await,
            ExploreCommand::Range(field, bound, value) => {
                controller.edit_range(field, bound, &value);
                controller.settled().await;
            }
            ExploreCommand::Search(text) => {
                controller.edit_search(&text);
                controller.settled().await;
            }
            ExploreCommand::Sort(column) => controller.click_sort(column).await,
            ExploreCommand::Page(page) => controller.go_to_page(page).await,
            ExploreCommand::Next => controller.next_page().await,
            ExploreCommand::Prev => controller.prev_page().await,
            ExploreCommand::Size(size) => controller.set_page_size(size).await,
            ExploreCommand::Clear => controller.clear_filters().await,
            ExploreCommand::Show => {}
            ExploreCommand::Open(id) => {
                match details.open(id).await {
                    Some(view) => print!("{}", format_detail(&view)),
                    None => {
                        if let Some(notice) = details.take_notice() {
                            println!("{notice}");
                        }
                    }
                }
                continue;
            }
            ExploreCommand::Filters => {
                let catalog = match controller.snapshot().catalog {
                    Some(catalog) => Some(catalog),
                    None => controller.load_catalog().await.ok(),
                };
                match catalog {
                    Some(catalog) => {
                        print!("{}", format_catalog(&catalog, &controller.snapshot().filters))
                    }
                    None => eprintln!("{}", "Filter values are unavailable".red()),
                }
                continue;
            }
            ExploreCommand::Help => {
                println!("{HELP}");
                continue;
            }
            ExploreCommand::Quit => break,
        }

        render(&controller);
    }

    Ok(())
}
