use funky_catalog::app::command::{Command, HELP};
use funky_catalog::app::display::{print_catalog, print_schedule};
use funky_catalog::app::request::fetch_with_retry;
use funky_catalog::app::{CatalogView, ScheduleView};
use funky_catalog::config::CatalogConfig;
use funky_catalog::error::Result;
use funky_catalog::interface::HttpClient;
use funky_catalog::model::structs::LoadState;
use funky_catalog::NoWasmClient;
use tokio::io::{AsyncBufReadExt, BufReader};

enum Next {
    ShowCatalog,
    Nothing,
    Reload,
    Quit,
}

fn handle(command: Command, catalog: &mut CatalogView, schedule: &ScheduleView) -> Next {
    match command {
        Command::Search(term) => catalog.set_search_term(term),
        Command::Sort(key) => catalog.sort_by(key),
        Command::Next => {
            catalog.next_page();
        }
        Command::Previous => {
            catalog.previous_page();
        }
        Command::Enroll(id) => {
            if let Err(e) = catalog.enroll(&id) {
                println!("{e}");
            }
        }
        Command::Drop(id) => {
            if schedule.drop_course(&id) == 0 {
                println!("course {id} is not enrolled");
            }
            print_schedule(&schedule.page());
            return Next::Nothing;
        }
        Command::Catalog => {}
        Command::Schedule => {
            print_schedule(&schedule.page());
            return Next::Nothing;
        }
        Command::Retry => {
            let failed = matches!(catalog.store().state(), LoadState::Failed(_));
            if failed && catalog.begin_load() {
                return Next::Reload;
            }
            println!("nothing to retry");
            return Next::Nothing;
        }
        Command::Help => {
            println!("{HELP}");
            return Next::Nothing;
        }
        Command::Quit => return Next::Quit,
    }
    Next::ShowCatalog
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        println!("usage: {} <courses-url> [config.json]", args[0]);
        return Ok(());
    }

    let mut config = match args.get(2) {
        Some(path) => CatalogConfig::from_json(&tokio::fs::read_to_string(path).await?)?,
        None => CatalogConfig::default(),
    };
    config.fetch.endpoint = args[1].clone();

    let client = NoWasmClient::new(&config.fetch).await?;
    let fetch = config.fetch.clone();
    let mut catalog = CatalogView::new(config);
    let schedule = ScheduleView::new(catalog.registry());

    // the fetch runs next to the input loop; commands keep working while it is pending
    let mut pending = catalog.begin_load();
    print_catalog(&catalog.page());
    println!("{HELP}");

    let load = fetch_with_retry(&client, &fetch);
    tokio::pin!(load);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            result = &mut load, if pending => {
                pending = false;
                catalog.finish_load(result);
                print_catalog(&catalog.page());
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    if pending {
                        catalog.finish_load((&mut load).await);
                        print_catalog(&catalog.page());
                    }
                    break;
                };

                let command = match line.parse::<Command>() {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };

                match handle(command, &mut catalog, &schedule) {
                    Next::ShowCatalog => print_catalog(&catalog.page()),
                    Next::Nothing => {}
                    Next::Reload => {
                        load.set(fetch_with_retry(&client, &fetch));
                        pending = true;
                        print_catalog(&catalog.page());
                    }
                    Next::Quit => break,
                }
            }
        }
    }

    Ok(())
}
