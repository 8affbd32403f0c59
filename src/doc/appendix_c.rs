/*!
# Limits and Internals

Each line is split into statements at every colon outside of a string.
Each statement is split into tokens with a small table of regular
expressions tried in order. Expressions are converted to postfix with
the shunting-yard algorithm and evaluated on a stack. Nothing is
compiled ahead of time, a statement is tokenized every time it runs.

Source code is UTF-8. There is a maximum of 65530 lines (0-65529).
Each line is limited to 255 characters.

The stacks for expression values, `FOR` loops and `GOSUB` calls are
each limited to 65535 entries.

Variables are limited to 65535 names.

*/
