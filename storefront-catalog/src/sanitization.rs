use ammonia::Builder;

/// Strip HTML from text shown to shoppers; script and style contents are dropped entirely
pub fn clean_all_html(src: &str) -> String {
    let mut builder = Builder::empty();
    builder.clean_content_tags(["script", "style"].into_iter().collect());
    builder.clean(src).to_string()
}
