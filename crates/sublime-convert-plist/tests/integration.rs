use sublime_convert_plist::{parse, Node, PlistError};

const THEME: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>name</key>
	<string>Tiny</string>
	<key>settings</key>
	<array>
		<dict>
			<key>settings</key>
			<dict>
				<key>background</key>
				<string>#272822</string>
			</dict>
		</dict>
		<dict>
			<key>scope</key>
			<string>comment, punctuation.definition.comment</string>
			<key>settings</key>
			<dict>
				<key>fontStyle</key>
				<string></string>
			</dict>
		</dict>
	</array>
</dict>
</plist>
"#;

#[test]
fn test_theme_shape() {
    let root = parse(THEME).unwrap();
    let top = &root.children()[0];

    assert_eq!(top.keys().collect::<Vec<_>>(), vec!["name", "settings"]);
    assert_eq!(top.strings().collect::<Vec<_>>(), vec![Some("Tiny")]);

    let rules = top.arrays().next().unwrap().children();
    assert_eq!(rules.len(), 2);
    assert_eq!(
        rules[0],
        Node::Dict(vec![
            Node::Key("settings".into()),
            Node::Dict(vec![
                Node::Key("background".into()),
                Node::Str(Some("#272822".into())),
            ]),
        ])
    );

    let font_style = rules[1].dicts().next().unwrap();
    assert_eq!(font_style.strings().collect::<Vec<_>>(), vec![None]);
}

#[test]
fn test_truncated_theme_fails() {
    let truncated = &THEME[..THEME.find("</array>").unwrap()];
    assert!(parse(truncated).is_err());
}

#[test]
fn test_error_carries_position() {
    match parse("<plist><dict></array></plist>") {
        Err(PlistError::Xml { .. }) | Err(PlistError::UnexpectedClose { .. }) => {}
        other => panic!("expected an XML error, got {other:?}"),
    }
}
