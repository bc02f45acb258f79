use clap::{Parser, Subcommand};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "bookstore-cli")]
#[command(about = "Command-line client for the bookstore service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every book in the catalog
    Books,
    /// Look up a book by ISBN
    Isbn { isbn: String },
    /// List books by author (case-insensitive)
    Author { author: String },
    /// List books whose title contains a fragment
    Title { title: String },
    /// Show reviews for a book
    Reviews { id: u32 },
    /// Register a new user
    Register { username: String, password: String },
    /// Check a username/password pair
    Login { username: String, password: String },
    /// Add or replace a review
    Review {
        id: u32,
        #[arg(short, long)]
        username: String,
        text: String,
    },
    /// Delete a review
    DeleteReview {
        id: u32,
        #[arg(short, long)]
        username: String,
    },
    /// Query the remote books API through the service
    External {
        #[arg(long, conflicts_with_all = ["author", "title"])]
        isbn: Option<String>,
        #[arg(long, conflicts_with = "title")]
        author: Option<String>,
        #[arg(long)]
        title: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');
    let request = |method: Method, path: String| client.request(method, format!("{}{}", base, path));

    let req = match cli.command {
        Commands::Books => request(Method::GET, "/books".into()),
        Commands::Isbn { isbn } => request(Method::GET, format!("/books/isbn/{}", segment(&isbn))),
        Commands::Author { author } => {
            request(Method::GET, format!("/books/author/{}", segment(&author)))
        }
        Commands::Title { title } => {
            request(Method::GET, format!("/books/title/{}", segment(&title)))
        }
        Commands::Reviews { id } => request(Method::GET, format!("/books/{}/reviews", id)),
        Commands::Register { username, password } => request(Method::POST, "/users/register".into())
            .json(&json!({ "username": username, "password": password })),
        Commands::Login { username, password } => request(Method::POST, "/users/login".into())
            .json(&json!({ "username": username, "password": password })),
        Commands::Review { id, username, text } => {
            request(Method::POST, format!("/books/{}/reviews", id))
                .json(&json!({ "username": username, "review": text }))
        }
        Commands::DeleteReview { id, username } => {
            request(Method::DELETE, format!("/books/{}/reviews", id))
                .json(&json!({ "username": username }))
        }
        Commands::External { isbn, author, title } => {
            let path = match (isbn, author, title) {
                (Some(isbn), _, _) => format!("/external-books/isbn/{}", segment(&isbn)),
                (_, Some(author), _) => format!("/external-books/author/{}", segment(&author)),
                (_, _, Some(title)) => format!("/external-books/title/{}", segment(&title)),
                _ => "/external-books".to_string(),
            };
            request(Method::GET, path)
        }
    };

    print_response(req).await
}

/// Percent-encode a single path segment.
fn segment(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Non-2xx responses become an error so the process exits non-zero.
fn ensure_success(status: StatusCode, text: String) -> Result<String, String> {
    if status.is_success() {
        Ok(text)
    } else {
        Err(format!("bookstore returned status {}: {}", status, text))
    }
}

async fn print_response(req: RequestBuilder) -> Result<(), Box<dyn std::error::Error>> {
    let res = req.send().await?;
    let status = res.status();
    let text = ensure_success(status, res.text().await?)?;

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
