//! Contents of the generated files. Everything here is pure string building.

use crate::models::PackageName;

pub fn readme(package: &PackageName, description: &str, docs: bool) -> String {
    let mut tree = format!(
        "{package}\n\
         ┣━ README.md\n\
         ┣━ LICENSE\n\
         ┣━ setup.py\n\
         ┣━ {package}\n\
         ┃   ┗━ __init__.py\n"
    );
    let (tests_branch, tests_indent) = if docs { ("┣━", "┃") } else { ("┗━", " ") };
    tree.push_str(&format!(
        "{tests_branch} tests\n\
         {tests_indent}   ┣━ context.py\n\
         {tests_indent}   ┗━ test_basic.py\n"
    ));
    if docs {
        tree.push_str("┗━ docs\n");
    }

    format!(
        "# {package}\n\n\
         ## Description\n{description}\n\n\
         ## Examples\n\n\
         ## Repo Structure\n\n\
         ```text\n{tree}```\n"
    )
}

/// `<package>/__init__.py`: the license notice and a click entry point.
pub fn init(notice: &str) -> String {
    format!(
        r#"{notice}

import click


@click.command()
@click.option('--option1', default='', help="First option")
def main(option1):
    '''
    Description of the package.
    '''
"#
    )
}

/// `tests/context.py`: makes the package importable without installing it.
pub fn context(notice: &str, package: &PackageName) -> String {
    format!(
        "{notice}\n\n\
         import os\n\
         import sys\n\
         sys.path.insert(0, os.path.abspath(os.path.join(os.path.dirname(__file__), '..')))\n\
         import {package}\n"
    )
}

pub fn test_basic(notice: &str, package: &PackageName) -> String {
    format!("{notice}\n\nfrom .context import {package}\n")
}

/// `setup.py`. `author_email` is only emitted when `email` is non-empty.
pub fn setup(package: &PackageName, author: &str, email: &str, notice: &str, readme: &str) -> String {
    let mut out = format!(
        "from setuptools import setup, find_packages\n\
         \n\
         setup(\n    \
         name='{package}',\n    \
         version='0.1',\n    \
         author='{}',\n",
        py_single_quoted(author)
    );
    let email = email.trim();
    if !email.is_empty() {
        out.push_str(&format!("    author_email='{}',\n", py_single_quoted(email)));
    }
    out.push_str(&format!(
        "    packages=find_packages(),\n    \
         long_description='''{}''',\n    \
         long_description_content_type='text/markdown',\n    \
         license='''{}''',\n    \
         include_package_data=True,\n    \
         install_requires=[\n        \
         'Click',\n    \
         ],\n    \
         entry_points='''\n        \
         [console_scripts]\n        \
         {package}={package}.__init__:main\n    \
         ''',\n\
         )\n",
        py_triple_quoted(readme),
        py_triple_quoted(notice),
    ));
    out
}

/// Escape `value` for a single-quoted Python string literal, which may not span lines.
fn py_single_quoted(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

fn py_triple_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace("'''", "\\'\\'\\'")
}
