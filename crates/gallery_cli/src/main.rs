//! Command-line front end for the gallery document.
//!
//! # Responsibility
//! - Map one CLI invocation to one handler call.
//! - Print results and exit non-zero on fatal handler errors.

use clap::{Parser, Subcommand};
use gallery_core::{
    core_version, init_logging_from_env, resolve_store_path, CancellationToken, Catalog,
    CreateGalleryCommand, CreateGalleryRequest, CreateWorkCommand, CreateWorkRequest,
    DeleteGalleryCommand, DeleteWorkCommand, GalleryResult, GetAllGalleriesQuery,
    GetGalleryByIdQuery, GetGalleryWorksQuery, GetWorkByIdQuery, GetWorkOwnerQuery, Handle,
    HandlerResult, SaveGalleryResult, StoreOptions, UpdateGalleryCommand, UpdateGalleryRequest,
    UpdateWorkCommand, UpdateWorkRequest, WorkResult,
};
use log::warn;
use std::path::PathBuf;
use std::process::ExitCode;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "gallery")]
#[command(about = "Inspect and edit the art gallery document")]
struct Args {
    /// Path to the JSON document (defaults to GALLERY_STORE_PATH, then a temp file)
    #[arg(short, long)]
    store: Option<PathBuf>,

    /// Write indented JSON
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Health check
    Ping,
    /// Print the core version
    Version,
    /// List all galleries
    List,
    /// Show one gallery
    Show { gallery_id: Uuid },
    /// List the works of one gallery
    Works { gallery_id: Uuid },
    /// Show one work
    Work { work_id: Uuid },
    /// Print the gallery that owns a work
    Owner { work_id: Uuid },
    /// Create a gallery
    AddGallery {
        name: String,
        city: String,
        manager: String,
    },
    /// Create a work inside a gallery
    AddWork {
        gallery_id: Uuid,
        name: String,
        author: String,
        year: i32,
        price: f64,
    },
    /// Edit a gallery's name, city and manager
    UpdateGallery {
        gallery_id: Uuid,
        name: String,
        city: String,
        manager: String,
    },
    /// Edit a work owned by `gallery_id`
    UpdateWork {
        gallery_id: Uuid,
        work_id: Uuid,
        name: String,
        author: String,
        year: i32,
        price: f64,
    },
    /// Delete a gallery and its works
    DeleteGallery { gallery_id: Uuid },
    /// Delete one work
    DeleteWork { work_id: Uuid },
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = init_logging_from_env() {
        eprintln!("logging disabled: {err}");
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            warn!("event=cli_command module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> HandlerResult<()> {
    let path = resolve_store_path(args.store.as_deref());
    let catalog = Catalog::open(path, StoreOptions { pretty: args.pretty });
    let galleries = catalog.gallery_handlers();
    let works = catalog.work_handlers();
    let cancel = CancellationToken::new();

    match args.command {
        Command::Ping => println!("pong"),
        Command::Version => println!("gallery_core version={}", core_version()),
        Command::List => {
            for gallery in galleries.handle(GetAllGalleriesQuery, &cancel)? {
                print_gallery(&gallery);
            }
        }
        Command::Show { gallery_id } => {
            match galleries.handle(GetGalleryByIdQuery { gallery_id }, &cancel)? {
                Some(gallery) => print_gallery(&gallery),
                None => println!("gallery not found: {gallery_id}"),
            }
        }
        Command::Works { gallery_id } => {
            match works.handle(GetGalleryWorksQuery { gallery_id }, &cancel)? {
                Some(items) => items.iter().for_each(print_work),
                None => println!("gallery not found: {gallery_id}"),
            }
        }
        Command::Work { work_id } => match works.handle(GetWorkByIdQuery { work_id }, &cancel)? {
            Some(work) => print_work(&work),
            None => println!("work not found: {work_id}"),
        },
        Command::Owner { work_id } => match works.handle(GetWorkOwnerQuery { work_id }, &cancel)? {
            Some(gallery_id) => println!("{gallery_id}"),
            None => println!("work not found: {work_id}"),
        },
        Command::AddGallery {
            name,
            city,
            manager,
        } => {
            let command = CreateGalleryCommand {
                request: Some(CreateGalleryRequest {
                    name,
                    city,
                    manager,
                }),
            };
            match galleries.handle(command, &cancel)? {
                Some(saved) => println!("{}", saved.id),
                None => println!("gallery rejected"),
            }
        }
        Command::AddWork {
            gallery_id,
            name,
            author,
            year,
            price,
        } => {
            let command = CreateWorkCommand {
                gallery_id,
                request: Some(CreateWorkRequest {
                    name,
                    author,
                    creation_year: year,
                    ask_price: price,
                }),
            };
            match works.handle(command, &cancel)? {
                Some(saved) => println!("{}", saved.id),
                None => println!("work rejected"),
            }
        }
        Command::UpdateGallery {
            gallery_id,
            name,
            city,
            manager,
        } => {
            let command = UpdateGalleryCommand {
                request: Some(UpdateGalleryRequest {
                    id: gallery_id,
                    name,
                    city,
                    manager,
                }),
            };
            match galleries.handle(command, &cancel)? {
                Some(saved) => print_saved_gallery(&saved),
                None => println!("gallery not updated: {gallery_id}"),
            }
        }
        Command::UpdateWork {
            gallery_id,
            work_id,
            name,
            author,
            year,
            price,
        } => {
            let command = UpdateWorkCommand {
                gallery_id,
                request: Some(UpdateWorkRequest {
                    id: work_id,
                    name,
                    author,
                    creation_year: year,
                    ask_price: price,
                }),
            };
            match works.handle(command, &cancel)? {
                Some(saved) => print_work(&saved),
                None => println!("work not updated: {work_id}"),
            }
        }
        Command::DeleteGallery { gallery_id } => {
            let deleted = galleries.handle(DeleteGalleryCommand { gallery_id }, &cancel)?;
            println!("deleted={deleted}");
        }
        Command::DeleteWork { work_id } => {
            let deleted = works.handle(DeleteWorkCommand { work_id }, &cancel)?;
            println!("deleted={deleted}");
        }
    }

    Ok(())
}

fn print_gallery(gallery: &GalleryResult) {
    println!(
        "{}\t{}\t{}\t{}\tworks={}",
        gallery.id, gallery.name, gallery.city, gallery.manager, gallery.works_on_display
    );
}

fn print_saved_gallery(gallery: &SaveGalleryResult) {
    println!("{}\t{}\t{}\t{}", gallery.id, gallery.name, gallery.city, gallery.manager);
}

fn print_work(work: &WorkResult) {
    println!(
        "{}\t{}\t{}\t{}\t{}",
        work.id, work.name, work.author, work.creation_year, work.ask_price
    );
}
