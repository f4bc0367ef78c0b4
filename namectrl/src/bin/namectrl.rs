#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use clap::{
        Parser,
        Subcommand,
    };
    use namecore::{
        name::{
            Gender,
            Name,
        },
        platform::NameBackend,
        query::{
            ListQuery,
            DEFAULT_PAGE_SIZE,
            DEFAULT_SEARCH_LIMIT,
        },
        statistics::{
            PopularNames,
            RankBadge,
            TrendSettings,
            DEFAULT_COMPARE_YEARS,
            DEFAULT_HOT_THRESHOLD,
            DEFAULT_POPULAR_LIMIT,
            DEFAULT_TRENDING_LIMIT,
        },
    };
    use nameclient::Client;
    use namectrl::{
        favorites::{
            load_favorites,
            FavoriteSort,
        },
        paginator::{
            ListFilter,
            PaginatedList,
            Paginator,
        },
        search::{
            SearchOutcome,
            SearchSession,
        },
        welcome::{
            complete_welcome,
            should_show_welcome,
        },
    };
    use nameprefs::{
        storage::FileStorage,
        PreferenceStore,
    };
    use serde::Serialize;
    use std::path::PathBuf;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(subcommand)]
        command: Commands,
        #[clap(long, value_name = "NAMES_API_BASE_URL", env = "NAMES_API_BASE_URL")]
        api_base_url: String,
        #[clap(long, value_name = "NAMES_PREFS_PATH", env = "NAMES_PREFS_PATH", default_value = "namectrl-prefs.json")]
        prefs: PathBuf,
        #[clap(short = 'j', long = "json", action)]
        json: bool,
        #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbose: u8,
    }

    #[derive(Debug, Subcommand)]
    enum Commands {
        List {
            #[clap(long, default_value = "1")]
            page: u32,
            #[clap(long, default_value_t = DEFAULT_PAGE_SIZE)]
            page_size: u32,
            #[clap(long, short = 'g')]
            gender: Option<Gender>,
            #[clap(long, short = 's')]
            search: Option<String>,
            /// Walk every page from the first one.
            #[clap(long, action)]
            all: bool,
        },
        #[command(arg_required_else_help = true)]
        Get {
            id: i64,
        },
        #[command(arg_required_else_help = true)]
        Search {
            query: String,
            #[clap(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
            limit: u32,
            #[clap(long, short = 'g')]
            gender: Option<Gender>,
        },
        Popular {
            #[clap(long)]
            year: Option<i32>,
            #[clap(long, short = 'g')]
            gender: Option<Gender>,
            #[clap(long, default_value_t = DEFAULT_POPULAR_LIMIT)]
            limit: u32,
        },
        Trending {
            #[clap(long, default_value_t = DEFAULT_COMPARE_YEARS)]
            compare_years: u32,
            #[clap(long, short = 'g')]
            gender: Option<Gender>,
            #[clap(long, default_value_t = DEFAULT_TRENDING_LIMIT)]
            limit: u32,
            #[clap(long, default_value_t = DEFAULT_HOT_THRESHOLD)]
            hot_threshold: f64,
        },
        Summary,
        #[command(arg_required_else_help = true)]
        Favorite {
            #[command(subcommand)]
            cmd: FavoriteCmd,
        },
        #[command(arg_required_else_help = true)]
        Recent {
            #[command(subcommand)]
            cmd: RecentCmd,
        },
        #[command(arg_required_else_help = true)]
        Welcome {
            #[command(subcommand)]
            cmd: WelcomeCmd,
        },
    }

    #[derive(Debug, Subcommand)]
    enum FavoriteCmd {
        #[command(arg_required_else_help = true)]
        Add {
            id: i64,
        },
        #[command(arg_required_else_help = true)]
        Remove {
            id: i64,
        },
        List {
            #[clap(long, default_value_t = FavoriteSort::Recent)]
            sort: FavoriteSort,
        },
    }

    #[derive(Debug, Subcommand)]
    enum RecentCmd {
        List,
        Clear,
    }

    #[derive(Debug, Subcommand)]
    enum WelcomeCmd {
        Status,
        Done,
    }

    struct Output {
        json: bool,
    }

    impl Output {
        fn names<'a>(&self, names: impl IntoIterator<Item = &'a Name>) -> anyhow::Result<()> {
            let names = names.into_iter().collect::<Vec<_>>();
            if self.json {
                return self.value(&names);
            }
            for name in names {
                let gender = name.gender.map(|g| g.code()).unwrap_or("-");
                println!("{:>8}  {gender}  {}", name.id, name.name);
            }
            Ok(())
        }

        fn value<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(())
        }
    }

    pub async fn run() -> anyhow::Result<()> {
        dotenvy::dotenv().ok();
        let args = Cli::parse();
        stderrlog::new()
            .module("namectrl")
            .module("nameclient")
            .module("nameprefs")
            .verbosity((args.verbose as usize) + 1)
            .timestamp(stderrlog::Timestamp::Second)
            .init()?;

        let client = Client::new(args.api_base_url.as_str())?;
        let prefs = PreferenceStore::new(FileStorage::new(&args.prefs));
        let out = Output { json: args.json };
        log::debug!("using api at {} with preferences in {}", client.base_url(), args.prefs.display());

        match args.command {
            Commands::List { page, page_size, gender, search, all } => {
                if all {
                    let filter = ListFilter { gender, search };
                    let list = PaginatedList::new(client, Paginator::new(filter, page_size));
                    list.load_all().await?;
                    list.with(|p| {
                        out.names(p.names())?;
                        if !out.json {
                            println!(
                                "{} names over {} pages ({} total)",
                                p.len(),
                                p.pages().len(),
                                p.total_rows().unwrap_or_default(),
                            );
                        }
                        anyhow::Ok(())
                    })?;
                } else {
                    let query = ListQuery {
                        search,
                        ..ListQuery::page(page, page_size, gender)
                    };
                    let listing = client.list_names(&query).await?;
                    if out.json {
                        out.value(&listing)?;
                    } else {
                        out.names(&listing.list)?;
                        let info = &listing.page_info;
                        println!(
                            "page {} ({} per page, {} total){}",
                            info.page,
                            info.page_size,
                            info.total_rows,
                            if info.is_last_page { ", last page" } else { "" },
                        );
                    }
                }
            }
            Commands::Get { id } => {
                let name = client.get_name(id).await?;
                if out.json {
                    out.value(&name)?;
                } else {
                    out.names([&name])?;
                    for (label, value) in [
                        ("summary", &name.brief_summary),
                        ("origin", &name.origin),
                        ("meaning", &name.meaning),
                    ] {
                        if let Some(value) = value {
                            println!("{label}: {value}");
                        }
                    }
                    let favorite = prefs.is_favorite(id);
                    println!("favorite: {}", if favorite { "yes" } else { "no" });
                }
            }
            Commands::Search { query, limit, gender } => {
                let session = SearchSession::new(client, prefs)
                    .limit(limit);
                match session.submit(&query, gender).await? {
                    SearchOutcome::Results(names) => out.names(&names)?,
                    _ => log::warn!("nothing to search for"),
                }
            }
            Commands::Popular { year, gender, limit } => {
                let names = client.get_popular_names(year, gender, Some(limit)).await?;
                if out.json {
                    out.value(&names)?;
                } else {
                    let names = PopularNames {
                        year,
                        gender: gender.map(|g| g.to_string()),
                        names,
                    };
                    for (rank, badge, name) in names.ranked() {
                        let badge = match badge {
                            RankBadge::Numbered(_) => badge.to_string(),
                            _ => format!(" {badge}"),
                        };
                        println!(
                            "{badge:>4} {:<20} {:>8} {:>5.1}%",
                            name.name,
                            name.count,
                            name.bar_width(rank),
                        );
                    }
                }
            }
            Commands::Trending { compare_years, gender, limit, hot_threshold } => {
                let settings = TrendSettings::new(hot_threshold);
                let names = client.get_trending_names(Some(compare_years), gender, Some(limit)).await?;
                if out.json {
                    out.value(&names)?;
                } else {
                    for name in names.iter() {
                        println!(
                            "{:<20} {:>+8.1}% {:>8} -> {:<8} {}",
                            name.name,
                            name.growth,
                            name.older_count,
                            name.recent_count,
                            name.class(&settings),
                        );
                    }
                }
            }
            Commands::Summary => {
                let summary = client.get_statistics_summary().await?;
                if out.json {
                    out.value(&summary)?;
                } else {
                    println!("names: {}", summary.total_names);
                    println!(
                        "female: {}, male: {}, unisex: {}",
                        summary.breakdown.female,
                        summary.breakdown.male,
                        summary.breakdown.unisex,
                    );
                    print!("yearly records: {}", summary.yearly_statistics.total_records);
                    match summary.yearly_statistics.year_range {
                        Some(range) => println!(" ({}-{})", range.from, range.to),
                        None => println!(),
                    }
                }
            }
            Commands::Favorite { cmd } => parse_favorite(&client, &prefs, &out, cmd).await?,
            Commands::Recent { cmd } => match cmd {
                RecentCmd::List => {
                    let recent = prefs.list_recent_searches();
                    if out.json {
                        out.value(&recent)?;
                    } else {
                        recent.iter().for_each(|term| println!("{term}"));
                    }
                }
                RecentCmd::Clear => prefs.clear_recent_searches(),
            },
            Commands::Welcome { cmd } => match cmd {
                WelcomeCmd::Status => {
                    let due = should_show_welcome(&prefs);
                    println!("welcome {}", if due { "pending" } else { "completed" });
                }
                WelcomeCmd::Done => complete_welcome(&prefs),
            },
        }

        Ok(())
    }

    async fn parse_favorite(
        client: &Client,
        prefs: &PreferenceStore<FileStorage>,
        out: &Output,
        arg: FavoriteCmd,
    ) -> anyhow::Result<()> {
        match arg {
            FavoriteCmd::Add { id } => {
                // make sure the id exists before remembering it
                let name = client.get_name(id).await?;
                prefs.add_favorite(id);
                println!("added {} ({id}) to favorites", name.name);
            }
            FavoriteCmd::Remove { id } => {
                prefs.remove_favorite(id);
                println!("removed {id} from favorites");
            }
            FavoriteCmd::List { sort } => {
                let names = load_favorites(client, prefs, sort).await;
                out.names(&names)?;
            }
        }
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::run().await
}

#[cfg(target_arch = "wasm32")]
pub fn main() {
    // the command line surface is native only
}
