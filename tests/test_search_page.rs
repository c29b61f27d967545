#[cfg(test)]
mod tests {
    use data18_agent::{ScrapeError, SearchPage, SearchResultEntry};

    fn card(path: &str, title: &str) -> String {
        format!(
            r#"
            <div class="grid-item">
                <div class="grid-box">
                    <a class="boxcover-link" href="{path}">
                        <img class="img-fluid" title="{title}" src="https://imgs.example/{path}.jpg">
                    </a>
                    <div class="product-details">
                        <a href="{path}">{title}</a>
                    </div>
                </div>
            </div>
            "#
        )
    }

    fn search_page(cards: &[String]) -> String {
        format!(
            r#"
            <!DOCTYPE html>
            <html>
            <head><title>Search</title></head>
            <body>
                <div class="grid">{}</div>
            </body>
            </html>
            "#,
            cards.join("\n")
        )
    }

    #[test]
    fn test_results_in_document_order() {
        let html = search_page(&[
            card("/111/alpha.html", "Alpha"),
            card("/222/beta.html", "Beta"),
            card("/333/gamma.html", "Gamma"),
        ]);
        let page = SearchPage::parse(&html);

        let entries: Vec<SearchResultEntry> = page
            .search_results()
            .unwrap()
            .iter()
            .map(|result| result.entry().unwrap())
            .collect();

        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries[0],
            SearchResultEntry {
                title: "Alpha".to_string(),
                details_path: "/111/alpha.html".to_string(),
            }
        );
        assert_eq!(entries[1].title, "Beta");
        assert_eq!(entries[2].details_path, "/333/gamma.html");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let html = search_page(&[
            card("/111/alpha.html", "Alpha"),
            card("/111/alpha.html", "Alpha"),
        ]);
        let page = SearchPage::parse(&html);
        assert_eq!(page.search_results().unwrap().len(), 2);
    }

    #[test]
    fn test_only_exact_grid_item_class_is_a_card() {
        let html = search_page(&[
            card("/111/alpha.html", "Alpha"),
            r#"<div class="grid-item featured"><a href="/9/promo.html" title="Promo"></a></div>"#
                .to_string(),
        ]);
        let page = SearchPage::parse(&html);
        let results = page.search_results().unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title().unwrap(), "Alpha");
    }

    #[test]
    fn test_no_results() {
        let page = SearchPage::parse(&search_page(&[]));
        assert!(page.search_results().unwrap().is_empty());
    }

    #[test]
    fn test_card_without_link_fails() {
        let html = search_page(&[r#"<div class="grid-item"><img title="No Link"></div>"#.to_string()]);
        let page = SearchPage::parse(&html);
        let results = page.search_results().unwrap();

        assert_eq!(results[0].title().unwrap(), "No Link");
        assert!(matches!(
            results[0].details_path(),
            Err(ScrapeError::MissingElement(_))
        ));
    }
}
