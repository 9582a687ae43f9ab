use grr::impl_record;

pub struct Person {
    pub name: String,
    pub age: u32,
}

impl_record!(Person { name => "Name", age => "Age" });

pub struct Section {
    pub title: String,
}

impl_record!(Section { title => "Title" });

pub fn sections(titles: &[&str]) -> Vec<Section> {
    titles
        .iter()
        .map(|title| Section {
            title: title.to_string(),
        })
        .collect()
}

pub const SECTION_TEMPLATE: &str = "<section><h2>{{.Title}}</h2></section>";
