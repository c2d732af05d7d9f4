#[cfg(test)]
mod verify {
    use framed::error::ArgumentError;
    use framed::output::annotate;
    use framed::rendering::*;

    fn expected(renderer: &impl Render) -> String {
        let mut result = renderer.open();
        for _ in 0..REPETITIONS {
            result.push_str(&renderer.print());
        }
        result.push_str(&renderer.close());
        result
    }

    #[test]
    fn output_is_open_then_prints_then_close() {
        for c in ['*', ' ', '\n', 'é', '🦀'] {
            let renderer = CharRenderer::new(c);
            assert_eq!(render(&renderer), expected(&renderer));
        }

        for text in ["", "a", "Hello, world.", "tab\there", "ÅÄÖ"] {
            let renderer = StringRenderer::new(text);
            assert_eq!(render(&renderer), expected(&renderer));
        }
    }

    #[test]
    fn print_is_repeated_five_times() {
        assert_eq!(REPETITIONS, 5);

        let renderer = StringRenderer::new("line");
        let result = render(&renderer);
        assert_eq!(
            result
                .lines()
                .filter(|line| *line == "| line |")
                .count(),
            5
        );
        assert_eq!(
            result
                .lines()
                .count(),
            7
        );
    }

    #[test]
    fn renderers_are_shareable_across_threads() {
        let renderer = StringRenderer::new("shared");
        let single = render(&renderer);

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| render(&renderer)))
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap(), single);
            }
        });
    }

    #[test]
    fn parsing_characters_from_arguments() {
        let renderer: CharRenderer = "#"
            .parse()
            .unwrap();
        assert_eq!(render(&renderer), "<<#####>>");

        let error: ArgumentError = "##"
            .parse::<CharRenderer>()
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Expected a single character: \"##\" is 2 characters long"
        );
    }

    #[test]
    fn annotated_output() {
        let result = annotate(&StringRenderer::new("Hi")).unwrap();
        assert_eq!(
            result,
            "string display: 1 open, 5 print, 1 close\n\
             +--+\n\
             | Hi |\n\
             | Hi |\n\
             | Hi |\n\
             | Hi |\n\
             | Hi |\n\
             +--+\n"
        );
    }
}
