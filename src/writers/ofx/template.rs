//! OFX 1.02 SGML skeleton and the field substitution that fills it.
//!
//! Tag names, their order and the header lines are fixed by the dialect;
//! only the `{field}` placeholders vary.

use encoding_rs::WINDOWS_1252;

pub(super) const HEADER: &str = "OFXHEADER:100
DATA:OFXSGML
VERSION:102
SECURITY:NONE
ENCODING:USASCII
CHARSET:1252
COMPRESSION:NONE
OLDFILEUID:NONE
NEWFILEUID:NONE
<OFX>
<SIGNONMSGSRSV1>
        <SONRS>
                <STATUS>
                        <CODE>0</CODE>
                        <SEVERITY>INFO</SEVERITY>
                </STATUS>
                <DTSERVER>{start}
                <LANGUAGE>{language}
                <DTACCTUP>{start}
                <FI>
                        <ORG>{org}
                        <FID>{fid}
                </FI>
        </SONRS>
</SIGNONMSGSRSV1>
<BANKMSGSRSV1>
        <STMTTRNRS>
                <TRNUID>0
                <STATUS>
                        <CODE>0
                        <SEVERITY>INFO
                </STATUS>
                <STMTRS>
                        <CURDEF>{currency}
                        <BANKACCTFROM>
                                <BANKID>{bank_id}
                                <ACCTID>{account}
                                <ACCTTYPE>{account_type}
                        </BANKACCTFROM>
                        <BANKTRANLIST>
";

pub(super) const STATEMENT: &str = "
                                <STMTTRN>
                                        <TRNTYPE>{type}
                                        <DTPOSTED>{date}
                                        <TRNAMT>{value}
                                        <FITID>{fitid}
                                        <CHECKNUM>{checknum}
                                        <MEMO>{memo}
                                </STMTTRN>
";

pub(super) const FOOTER: &str = "
                        </BANKTRANLIST>
                        <LEDGERBAL>
                                <BALAMT>{balance}
                                <DTASOF>{end}
                        </LEDGERBAL>
                </STMTRS>
        </STMTTRNRS>
</BANKMSGSRSV1>
</OFX>";

/// Substitutes every `{key}` in `template` with its value from `fields`.
///
/// Single pass: substituted values are never scanned for placeholders.
/// Unknown keys are left untouched.
pub(super) fn render(template: &str, fields: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let key = &after[..close];
        match fields.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Encodes text as Windows-1252, the charset the header declares.
///
/// `None` when some character has no Windows-1252 byte. C1 controls
/// (U+0080..=U+009F) count as unmappable.
pub(super) fn encode_cp1252(text: &str) -> Option<Vec<u8>> {
    if text.chars().any(|c| ('\u{80}'..='\u{9f}').contains(&c)) {
        return None;
    }

    let (bytes, _, had_errors) = WINDOWS_1252.encode(text);
    (!had_errors).then(|| bytes.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("<A>{a}", &[("a", "1")], "<A>1")]
    #[case("{a}{b}{a}", &[("a", "x"), ("b", "y")], "xyx")]
    #[case("<A>{missing}", &[("a", "1")], "<A>{missing}")]
    #[case("no placeholders", &[], "no placeholders")]
    #[case("<MEMO>{memo}", &[("memo", "{memo} {a}"), ("a", "z")], "<MEMO>{memo} {a}")]
    #[case("open { only", &[], "open { only")]
    fn test_render(#[case] template: &str, #[case] fields: &[(&str, &str)], #[case] expected: &str) {
        assert_eq!(render(template, fields), expected);
    }

    #[test]
    fn test_statement_tag_order() {
        let tags: Vec<&str> = STATEMENT
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.split('>').next().unwrap_or(line))
            .collect();

        assert_eq!(
            tags,
            vec![
                "<STMTTRN", "<TRNTYPE", "<DTPOSTED", "<TRNAMT", "<FITID", "<CHECKNUM", "<MEMO",
                "</STMTTRN",
            ]
        );
    }

    #[test]
    fn test_encode_cp1252_accents() {
        let bytes = encode_cp1252("João Conceição (á@é.com)").unwrap();
        assert_eq!(bytes.len(), "João Conceição (á@é.com)".chars().count());
        assert_eq!(bytes[2], 0xE3);
    }

    #[rstest]
    #[case("Loja “Ação” – €", b"Loja \x93A\xE7\xE3o\x94 \x96 \x80".as_slice())]
    #[case("Zoë ‘x’ … ™", b"Zo\xEB \x91x\x92 \x85 \x99".as_slice())]
    #[case("Œuvre — Š", b"\x8Cuvre \x97 \x8A".as_slice())]
    fn test_encode_cp1252_punctuation(#[case] text: &str, #[case] expected: &[u8]) {
        assert_eq!(encode_cp1252(text).unwrap(), expected);
    }

    #[rstest]
    #[case("😀")]
    #[case("Loja ☃")]
    #[case("Ação \u{0081}")]
    #[case("\u{0093}aspas\u{0094}")]
    fn test_encode_cp1252_rejects_unmappable(#[case] text: &str) {
        assert_eq!(encode_cp1252(text), None);
    }
}
