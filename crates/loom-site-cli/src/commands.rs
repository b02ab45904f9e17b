// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Subcommand implementations. Output goes to the writer passed in.

use std::fmt;
use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use loom_site_content::{
	CatalogEntry, CommandCategory, ContentIndex, Difficulty, DocCategory, Facet, FaqCategory,
	SearchQuery, Severity,
};
use loom_site_i18n::{coverage, Locale, Localizer, DEFAULT_LOCALE, LOCALES};
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Which catalog to search.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogArg {
	Commands,
	Faq,
	Docs,
	Troubleshooting,
}

impl CatalogArg {
	/// Top-level bundle namespace holding this catalog's localized titles.
	fn namespace(&self) -> &'static str {
		match self {
			CatalogArg::Commands => "commands",
			CatalogArg::Faq => "faq",
			CatalogArg::Docs => "docs",
			CatalogArg::Troubleshooting => "troubleshooting",
		}
	}
}

/// Everything a subcommand reads.
pub struct Context<'a> {
	pub localizer: &'a Localizer,
	pub content: &'a ContentIndex,
	pub locale: Locale,
	pub min_query_len: usize,
}

pub fn translate(ctx: &Context<'_>, key: &str, out: &mut impl Write) -> Result<()> {
	writeln!(out, "{}", ctx.localizer.t_in(ctx.locale, key))?;
	Ok(())
}

pub fn slice(ctx: &Context<'_>, namespace: &str, out: &mut impl Write) -> Result<()> {
	let slice = ctx.localizer.slice(ctx.locale, namespace);
	writeln!(out, "{}", serde_json::to_string_pretty(&Value::Object(slice))?)?;
	Ok(())
}

pub struct SearchArgs<'a> {
	pub catalog: CatalogArg,
	pub query: &'a str,
	pub category: Option<&'a str>,
	pub level: Option<&'a str>,
	pub json: bool,
}

pub fn search(ctx: &Context<'_>, args: &SearchArgs<'_>, out: &mut impl Write) -> Result<()> {
	let text = if args.query.trim().chars().count() < ctx.min_query_len {
		debug!(query = %args.query, min = ctx.min_query_len, "query below minimum length, showing all");
		""
	} else {
		args.query
	};

	let content = ctx.content;
	match args.catalog {
		CatalogArg::Commands => {
			let query: SearchQuery<CommandCategory> =
				SearchQuery::parse(text, args.category, args.level);
			warn_unknown(&query.category, &query.level);
			let hits = query.apply_unleveled(&content.commands);
			print_hits(ctx, args, &hits, out)
		}
		CatalogArg::Faq => {
			let query: SearchQuery<FaqCategory, Difficulty> =
				SearchQuery::parse(text, args.category, args.level);
			warn_unknown(&query.category, &query.level);
			let hits = query.apply(&content.faq);
			print_hits(ctx, args, &hits, out)
		}
		CatalogArg::Docs => {
			let query: SearchQuery<DocCategory> = SearchQuery::parse(text, args.category, args.level);
			warn_unknown(&query.category, &query.level);
			let hits = query.apply_unleveled(&content.docs);
			print_hits(ctx, args, &hits, out)
		}
		CatalogArg::Troubleshooting => {
			let query: SearchQuery<FaqCategory, Severity> =
				SearchQuery::parse(text, args.category, args.level);
			warn_unknown(&query.category, &query.level);
			let hits = query.apply(&content.troubleshooting);
			print_hits(ctx, args, &hits, out)
		}
	}
}

fn warn_unknown<C, L>(category: &Facet<C>, level: &Facet<L>) {
	if let Facet::Unknown(value) = category {
		warn!(category = %value, "unknown category, nothing will match");
	}
	if let Facet::Unknown(value) = level {
		warn!(level = %value, "unknown level, nothing will match");
	}
}

fn localized_title<E: CatalogEntry>(ctx: &Context<'_>, catalog: CatalogArg, entry: &E) -> String {
	let key = format!("{}.entries.{}.title", catalog.namespace(), entry.id());
	ctx.localizer
		.get(ctx.locale, &key)
		.or_else(|| ctx.localizer.get(DEFAULT_LOCALE, &key))
		.unwrap_or_else(|| entry.title().to_string())
}

fn print_hits<E>(
	ctx: &Context<'_>,
	args: &SearchArgs<'_>,
	hits: &[&E],
	out: &mut impl Write,
) -> Result<()>
where
	E: CatalogEntry,
	E::Category: fmt::Display,
{
	if args.json {
		let rows: Vec<Value> = hits
			.iter()
			.map(|entry| {
				json!({
					"id": entry.id(),
					"title": localized_title(ctx, args.catalog, *entry),
					"category": entry.category().to_string(),
				})
			})
			.collect();
		writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
		return Ok(());
	}

	if hits.is_empty() {
		writeln!(out, "{}", ctx.localizer.t_in(ctx.locale, "common.noResults"))?;
		return Ok(());
	}

	let width = hits.iter().map(|e| e.id().len()).max().unwrap_or(0);
	for entry in hits {
		writeln!(
			out,
			"{:width$}  {}",
			entry.id(),
			localized_title(ctx, args.catalog, *entry),
		)?;
	}
	Ok(())
}

/// Print the coverage audit. Returns `true` when every loaded locale is complete.
pub fn coverage_report(ctx: &Context<'_>, list_missing: bool, out: &mut impl Write) -> Result<bool> {
	let report = coverage(ctx.localizer);

	for locale in &report.locales {
		writeln!(
			out,
			"{:<3} {:>4}/{:<4} {:>5.1}%  missing {:<3} orphaned {}",
			locale.locale.code(),
			locale.translated,
			locale.total,
			locale.ratio() * 100.0,
			locale.missing.len(),
			locale.orphaned.len(),
		)?;
		if list_missing {
			for key in &locale.missing {
				writeln!(out, "    - {key}")?;
			}
		}
	}

	Ok(report.is_complete())
}

pub fn list_locales(ctx: &Context<'_>, out: &mut impl Write) -> Result<()> {
	for info in LOCALES {
		let marker = if info.locale == ctx.locale { "*" } else { " " };
		writeln!(
			out,
			"{marker} {:<3} {:<10} {:<12} {:<3} {:?}",
			info.code,
			info.name,
			info.native_name,
			info.direction.as_html_dir(),
			ctx.localizer.state(info.locale),
		)?;
	}
	Ok(())
}
