use xq_ir::{NodeId, NodeKind, SyntaxTree};
use xq_lexer_core::TokenKind;

use crate::{
    ConformanceReporter, ConformanceValidator, Requirement, SpecId, SpecVersion, ValidatorError,
    Version,
};

/// `xquery version "3.1";`
///
/// The declared version must be supported. MarkLogic's `"1.0-ml"` and
/// `"0.9-ml"` require MarkLogic.
#[derive(Clone, Copy, Debug, Default)]
pub struct VersionDeclValidator;

impl ConformanceValidator for VersionDeclValidator {
    fn name(&self) -> &'static str {
        "version-decl"
    }

    fn validate(
        &self,
        tree: &SyntaxTree,
        node: NodeId,
        reporter: &mut dyn ConformanceReporter,
    ) -> Result<(), ValidatorError> {
        if tree.kind(node) != NodeKind::VersionDecl {
            return Ok(());
        }
        let literal = tree
            .child_of_kind(node, NodeKind::StringLiteral)
            .ok_or_else(|| ValidatorError::missing(tree, node, "version string"))?;
        let contents = tree
            .child_token(literal, TokenKind::StringLiteralContents)
            .ok_or_else(|| ValidatorError::missing(tree, literal, "version text"))?;
        let text = tree
            .text(contents)
            .ok_or_else(|| ValidatorError::missing(tree, contents, "source text"))?;

        let required = if let Some(ml) = text.strip_suffix("-ml") {
            // Any MarkLogic release accepts its own dialects.
            let _: Version = parse(tree, contents, ml)?;
            SpecVersion::new(SpecId::MarkLogic, 1, 0)
        } else {
            SpecVersion {
                spec: SpecId::XQuery,
                version: parse(tree, contents, text)?,
            }
        };

        reporter.requires(
            literal,
            Requirement::new(required),
            Some(format!("version \"{text}\" requires {required} or later")),
        );
        Ok(())
    }
}

fn parse(tree: &SyntaxTree, node: NodeId, text: &str) -> Result<Version, ValidatorError> {
    text.parse().map_err(|_| ValidatorError::UnrecognizedText {
        node,
        kind: tree.kind(node),
        text: text.to_owned(),
    })
}
