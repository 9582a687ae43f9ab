//! Assembles a small page from nav, section and footer components and logs it.
//!
//! Run with `RUST_LOG=info cargo run --example page`.

use grr::{Fragment, TemplateError, compose, impl_record, map_records, render, to_context};

struct NavData {
    input_variable: String,
    other_input: String,
}

impl_record!(NavData {
    input_variable => "InputVariable",
    other_input => "OtherInput",
});

struct FootData {
    copy: String,
}

impl_record!(FootData { copy => "Copy" });

struct SectionData {
    title: String,
}

impl_record!(SectionData { title => "Title" });

fn foot(data: &FootData) -> Result<Fragment, TemplateError> {
    render(
        r#"
    <footer>
        {{.Copy}}
    </footer>
    "#,
        to_context(data),
    )
}

/// The nav embeds a footer, which its record type has no field for.
fn nav(data: &NavData) -> Result<Fragment, TemplateError> {
    let mut context = to_context(data);
    context.insert(
        "Foot",
        foot(&FootData {
            copy: "© 2021".into(),
        })?,
    );
    log::debug!("Nav context: {}", context);
    render(
        r#"
    <nav class="shadow sticky top-0 z-10">
        {{.InputVariable}}
        {{.OtherInput}}
        {{.Foot}}
    </nav>
    "#,
        context,
    )
}

fn main_sections(sections: &[SectionData]) -> Result<Fragment, TemplateError> {
    map_records(
        r#"
    <section>
        <h2>{{.Title}}</h2>
    </section>
    "#,
        sections,
    )
}

fn page() -> Result<Fragment, TemplateError> {
    let nav = nav(&NavData {
        input_variable: "Input Var 1".into(),
        other_input: "Input Var 2".into(),
    })?;
    let sections = main_sections(&[
        SectionData {
            title: "Section 1".into(),
        },
        SectionData {
            title: "Section 2".into(),
        },
        SectionData {
            title: "Section 3".into(),
        },
    ])?;
    let footer = foot(&FootData {
        copy: "© 2021".into(),
    })?;

    compose(
        r#"
    <html>
        <head>
            <title>all-the-highlights</title>
        </head>
        <body>
        {{yield}}
        </body>
    </html>
    "#,
        &[nav, sections, footer],
    )
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match page() {
        Ok(html) => log::info!("{}", html),
        Err(e) => {
            // A render failure aborts the demo; the engine itself only reports it.
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
