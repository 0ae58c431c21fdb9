//! Command-line client for the student record service.
//!
//! One subcommand per operation, plus `demo`, which walks through the full
//! CRUD cycle against a running server.
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use student_registry::facade::{AddRequest, UpdateRequest};
use student_registry::{Record, RecordFields, StudentClient};

#[derive(Parser, Debug)]
#[command(name = "student-client", about = "Exercise the student record service")]
struct Cli {
    /// Server endpoint.
    #[arg(long, default_value = "http://localhost:50051")]
    endpoint: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the number of students.
    Count,
    /// List every student.
    List,
    /// Find the first student whose name contains NAME (case-insensitive).
    Find { name: String },
    /// Register a new student.
    Add(FieldArgs),
    /// Replace every field of the student with ID.
    Update {
        id: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Remove the student with ID.
    Delete { id: String },
    /// Run the scripted walkthrough of every operation.
    Demo {
        /// Also probe the failure paths (unknown name, duplicate email, bogus ids).
        #[arg(long)]
        probes: bool,
    },
}

#[derive(Args, Debug)]
struct FieldArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    lastname: String,
    #[arg(long)]
    mail: String,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    street: Option<String>,
    #[arg(long)]
    city: Option<String>,
}

impl From<FieldArgs> for RecordFields {
    fn from(args: FieldArgs) -> Self {
        Self {
            name: args.name,
            lastname: args.lastname,
            mail: args.mail,
            phone: args.phone,
            street: args.street,
            city: args.city,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut client = StudentClient::connect(cli.endpoint.clone())
        .await
        .with_context(|| format!("is the server running at {}?", cli.endpoint))?;

    match cli.command {
        Command::Count => println!("Students: {}", client.count().await?),
        Command::List => print_list(&client.list_all().await?.records, "Students"),
        Command::Find { name } => find(&mut client, &name).await?,
        Command::Add(fields) => {
            add(&mut client, RecordFields::from(fields)).await?;
        }
        Command::Update { id, fields } => update(&mut client, &id, fields.into()).await?,
        Command::Delete { id } => delete(&mut client, &id).await?,
        Command::Demo { probes } => {
            demo(&mut client).await?;
            if probes {
                failure_probes(&mut client).await?;
            }
        }
    }

    Ok(())
}

async fn find(client: &mut StudentClient, name: &str) -> Result<()> {
    let response = client.find_by_name(name).await?;
    println!("\nSearch for \"{name}\": {}", response.message);
    if let Some(record) = &response.record {
        print_record(record);
    }
    Ok(())
}

async fn add(client: &mut StudentClient, fields: RecordFields) -> Result<Option<Record>> {
    let response = client.add(AddRequest::from(fields)).await?;
    println!("\nAdd: {}", response.message);
    if let Some(record) = &response.record {
        print_record(record);
    }
    Ok(response.record)
}

async fn update(client: &mut StudentClient, id: &str, fields: RecordFields) -> Result<()> {
    let response = client.update(UpdateRequest::new(id, fields)).await?;
    println!("\nUpdate: {}", response.message);
    if let Some(record) = &response.record {
        print_record(record);
    }
    Ok(())
}

async fn delete(client: &mut StudentClient, id: &str) -> Result<()> {
    let response = client.delete(id).await?;
    println!("\nDelete: {}", response.message);
    Ok(())
}

async fn demo(client: &mut StudentClient) -> Result<()> {
    section("1. COUNT STUDENTS");
    println!("Students: {}", client.count().await?);

    section("2. LIST INITIAL STUDENTS");
    print_list(&client.list_all().await?.records, "Initial state");

    section("3. ADD A NEW STUDENT");
    let added = add(
        client,
        RecordFields::new("Ana", "Rodríguez", "ana.rodriguez@email.com")
            .with_phone("+54 11 5555-6666")
            .with_street("Av. 9 de Julio 1500")
            .with_city("Buenos Aires"),
    )
    .await?;

    section("4. FIND STUDENT BY NAME");
    find(client, "Ana").await?;

    if let Some(record) = &added {
        section("5. UPDATE THE NEW STUDENT");
        update(
            client,
            &record.id,
            RecordFields::new("Ana María", "Rodríguez González", "ana.rodriguez.gonzalez@email.com")
                .with_phone("+54 11 7777-8888")
                .with_street("Av. Corrientes 2000")
                .with_city("Buenos Aires"),
        )
        .await?;
    }

    section("6. LIST AFTER CHANGES");
    print_list(&client.list_all().await?.records, "After add and update");

    if let Some(record) = &added {
        section("7. DELETE THE NEW STUDENT");
        delete(client, &record.id).await?;
    }

    section("8. FINAL LIST");
    print_list(&client.list_all().await?.records, "Final state");

    section("9. FINAL COUNT");
    println!("Students: {}", client.count().await?);

    section("DEMO COMPLETE");
    Ok(())
}

async fn failure_probes(client: &mut StudentClient) -> Result<()> {
    section("FAILURE PROBES");

    println!("Searching for a name nobody has:");
    find(client, "Pedro").await?;

    println!("\nAdding a student with an email already in use:");
    add(
        client,
        RecordFields::new("Juan Carlos", "Pérez", "juan.perez@email.com")
            .with_phone("+54 11 9999-0000")
            .with_street("Calle Falsa 123")
            .with_city("Springfield"),
    )
    .await?;

    println!("\nUpdating a student that does not exist:");
    update(
        client,
        "missing-id-12345",
        RecordFields::new("Name", "Lastname", "test@email.com"),
    )
    .await?;

    println!("\nDeleting a student that does not exist:");
    delete(client, "missing-id-67890").await?;

    Ok(())
}

fn section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

fn print_record(record: &Record) {
    println!("{} {}", record.name, record.lastname);
    println!("   Email: {}", record.mail);
    println!("   Phone: {}", or_unset(&record.phone));
    println!("   Address: {}, {}", record.street, record.city);
    println!("   ID: {}", record.id);
}

fn print_list(records: &[Record], title: &str) {
    println!("\n{title} ({} students):", records.len());
    if records.is_empty() {
        println!("   (no students registered)");
    }
    for (index, record) in records.iter().enumerate() {
        print!("\n{}. ", index + 1);
        print_record(record);
    }
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() {
        "not set"
    } else {
        value
    }
}
