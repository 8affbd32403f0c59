/*!
# Error Messages

Errors print as `?` followed by the message, the line number when the
error happened inside the program, and sometimes a detail.

```text
?UNDEFINED LINE IN 30; GOTO 100
```

| Code | Message | Typical cause |
|---|---|---|
| 1 | NEXT WITHOUT FOR | `NEXT` with no active loop |
| 2 | SYNTAX ERROR | Mismatched parentheses, wrong argument count, misplaced comma |
| 3 | RETURN WITHOUT GOSUB | `RETURN` with no pending `GOSUB` |
| 4 | OUT OF DATA | `READ` past the last `DATA` item |
| 5 | ILLEGAL FUNCTION CALL | A function got an argument it can't use |
| 6 | OVERFLOW | A number or result too large, or a line number over 65529 |
| 7 | OUT OF MEMORY | Loops or subroutines nested too deeply |
| 8 | UNDEFINED LINE | `GOTO`, `GOSUB`, `IF` or `RUN` to a missing line |
| 11 | DIVISION BY ZERO | Dividing by zero |
| 13 | TYPE MISMATCH | A string where a number belongs or the reverse |
| 16 | FORMULA TOO COMPLEX | An expression with too many pending operands |
| 22 | MISSING OPERAND | An operator without a value on one side |
| 23 | LINE BUFFER OVERFLOW | A line longer than 255 characters |
| 51 | INTERNAL ERROR | Should never happen |
| 66 | DIRECT STATEMENT IN FILE | A line without a number in a program file |
| 70 | UNEXPECTED CHARACTER | A character that is not part of the language |
| 71 | TOKENIZER STUCK | Input that can't be split into tokens |
| 72 | NEXT VARIABLE MISMATCH | `NEXT` naming a variable other than the innermost loop's |
| 73 | UNKNOWN STATEMENT | A statement starting with `THEN`, `TO`, a comma and so on |
| 74 | UNKNOWN OPERATOR | A keyword used as a value |
| 75 | BREAK | CTRL-C |
| 76 | TOO MANY VARIABLES | More than 65535 distinct variable names |

*/
